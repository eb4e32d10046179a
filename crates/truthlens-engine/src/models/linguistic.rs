//! Linguistic sub-model: certainty, hedging and specificity markers.

use truthlens_domain::features::{flag, FeatureSet};

use super::clamp_unit;

const BASE_SCORE: f64 = 0.5;
const CERTAINTY_CAP: f64 = 0.15;
const NUMBERS_BONUS: f64 = 0.12;
const DATES_BONUS: f64 = 0.10;
const CITATION_BONUS: f64 = 0.18;
const PROPER_NOUN_RATIO_CAP: f64 = 0.3;
const PROPER_NOUN_WEIGHT: f64 = 0.10;
const HEDGING_CAP: f64 = 0.25;
const SHORT_TEXT_WORDS: usize = 5;
const SHORT_TEXT_PENALTY: f64 = 0.15;

/// Scores confident, checkable prose higher than hedged or very short text
#[derive(Debug, Clone, Copy, Default)]
pub struct LinguisticModel;

impl LinguisticModel {
    /// Score a feature set
    pub fn score(&self, features: &FeatureSet) -> f64 {
        let mut score = BASE_SCORE;

        score += (features.certainty_ratio * 2.0).min(CERTAINTY_CAP);
        score += flag(features.has_numbers) * NUMBERS_BONUS;
        score += flag(features.has_dates) * DATES_BONUS;
        score += flag(features.has_citation) * CITATION_BONUS;
        score += features.proper_noun_ratio.min(PROPER_NOUN_RATIO_CAP) * PROPER_NOUN_WEIGHT;

        score -= (features.hedging_ratio * 3.0).min(HEDGING_CAP);

        if features.word_count < SHORT_TEXT_WORDS {
            score -= SHORT_TEXT_PENALTY;
        }

        clamp_unit(score)
    }
}
