//! Feature extraction

use regex::Regex;
use truthlens_domain::FeatureSet;

use crate::lexicon::{
    count_present, CAPITALIZED_PATTERN, CERTAINTY_MARKERS, CITATION_PHRASES, DIGITS_PATTERN,
    HEDGING_MARKERS, YEAR_PATTERN,
};
use crate::EngineError;

/// Turns raw text into a [`FeatureSet`]
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    digits: Regex,
    year: Regex,
    capitalized: Regex,
}

impl FeatureExtractor {
    /// Compile the extractor's patterns
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            digits: Regex::new(DIGITS_PATTERN)?,
            year: Regex::new(YEAR_PATTERN)?,
            capitalized: Regex::new(CAPITALIZED_PATTERN)?,
        })
    }

    /// Extract features from `text`. Empty input yields all-zero features.
    pub fn extract(&self, text: &str) -> FeatureSet {
        let lower = text.to_lowercase();
        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();
        let denominator = word_count.max(1) as f64;

        let certainty_count = count_present(&lower, &CERTAINTY_MARKERS);
        let hedging_count = count_present(&lower, &HEDGING_MARKERS);

        let number_count = self.digits.find_iter(text).count();
        let proper_noun_count = self.capitalized.find_iter(text).count();
        let citation_indicators = count_present(&lower, &CITATION_PHRASES);

        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

        FeatureSet {
            certainty_count,
            certainty_ratio: certainty_count as f64 / denominator,
            hedging_count,
            hedging_ratio: hedging_count as f64 / denominator,
            has_numbers: number_count > 0,
            has_dates: self.year.is_match(text),
            number_count,
            proper_noun_count,
            proper_noun_ratio: proper_noun_count as f64 / denominator,
            citation_indicators,
            has_citation: citation_indicators > 0,
            word_count,
            avg_word_length: total_chars as f64 / denominator,
        }
    }
}
