//! Factual sub-model: verifiable markers versus implausible claims.

use regex::{Regex, RegexSet};
use truthlens_domain::FeatureSet;

use crate::lexicon::{
    count_present, ABSURD_PATTERNS, AUTHORITY_KEYWORDS, CAPITALIZED_PATTERN, NUMBER_PATTERN,
    YEAR_PATTERN,
};
use crate::EngineError;

use super::clamp_unit;

const BASE_SCORE: f64 = 0.5;
const AUTHORITY_STEP: f64 = 0.08;
const AUTHORITY_CAP: f64 = 0.20;
const VERIFIABLE_STEP: f64 = 0.10;
const HEDGING_LIMIT: usize = 2;
const HEDGING_PENALTY: f64 = 0.15;
const ABSURD_PENALTY: f64 = 0.40;

/// Rewards authoritative, checkable detail and penalizes absurd claims
#[derive(Debug, Clone)]
pub struct FactualModel {
    year: Regex,
    number: Regex,
    capitalized: Regex,
    absurd: RegexSet,
}

impl FactualModel {
    /// Compile the model's patterns
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            year: Regex::new(YEAR_PATTERN)?,
            number: Regex::new(NUMBER_PATTERN)?,
            capitalized: Regex::new(CAPITALIZED_PATTERN)?,
            absurd: RegexSet::new(ABSURD_PATTERNS)?,
        })
    }

    /// Score raw text, using `features` for the hedging count
    pub fn score(&self, text: &str, features: &FeatureSet) -> f64 {
        let lower = text.to_lowercase();
        let mut score = BASE_SCORE;

        let authority = count_present(&lower, &AUTHORITY_KEYWORDS);
        score += (authority as f64 * AUTHORITY_STEP).min(AUTHORITY_CAP);

        let verifiable = [
            self.year.is_match(text),
            self.number.is_match(text),
            self.capitalized.is_match(text),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        score += verifiable as f64 * VERIFIABLE_STEP;

        if features.hedging_count > HEDGING_LIMIT {
            score -= HEDGING_PENALTY;
        }

        // One penalty no matter how many patterns match
        if self.absurd.is_match(&lower) {
            score -= ABSURD_PENALTY;
        }

        clamp_unit(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> FactualModel {
        FactualModel::new().unwrap()
    }

    #[test]
    fn test_verifiable_elements() {
        let text = "The Eiffel Tower was completed in 1889 and stands at 330 meters tall.";
        let score = model().score(text, &FeatureSet::default());
        assert!((score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_absurd_penalty_applied_once() {
        // Matches both "made of chocolate" and "melts every summer"
        let text = "the tower is made of chocolate and melts every summer";
        let score = model().score(text, &FeatureSet::default());
        assert!((score - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_flies_alternation() {
        let score = model().score("the bird flies south", &FeatureSet::default());
        assert!((score - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_tall_structure_pattern() {
        let score = model().score("a spire 12000 meters tall", &FeatureSet::default());
        // number bonus, then absurd penalty
        assert!((score - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_authority_capped() {
        let text = "a university research study in a journal, published by a professor";
        let score = model().score(text, &FeatureSet::default());
        assert!((score - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_heavy_hedging_penalty() {
        let features = FeatureSet {
            hedging_count: 3,
            ..Default::default()
        };
        let score = model().score("something vague", &features);
        assert!((score - 0.35).abs() < 1e-12);

        let features = FeatureSet {
            hedging_count: 2,
            ..Default::default()
        };
        assert!((model().score("something vague", &features) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_decimal_counts_as_number() {
        let score = model().score("ratio of 3.14", &FeatureSet::default());
        assert!((score - 0.6).abs() < 1e-12);
    }
}
