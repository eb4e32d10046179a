//! Score result module

use crate::{FeatureSet, RiskLevel};

/// Outcome of scoring one piece of text
///
/// All scores are kept at full precision. Use [`ScoreResult::rounded`] to get
/// the three-decimal copy meant for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Weighted ensemble confidence [0.0, 1.0]
    pub confidence: f64,
    /// Risk tier derived from `confidence`
    pub risk: RiskLevel,
    /// Linguistic sub-model score [0.0, 1.0]
    pub linguistic_score: f64,
    /// Semantic sub-model score [0.0, 1.0]
    pub semantic_score: f64,
    /// Factual sub-model score [0.0, 1.0]
    pub factual_score: f64,
    /// Features the sub-models were computed from
    pub features: FeatureSet,
}

impl ScoreResult {
    /// Copy with the four scores rounded to 3 decimal places
    pub fn rounded(&self) -> Self {
        Self {
            confidence: round_to(self.confidence, 3),
            risk: self.risk,
            linguistic_score: round_to(self.linguistic_score, 3),
            semantic_score: round_to(self.semantic_score, 3),
            factual_score: round_to(self.factual_score, 3),
            features: self.features.clone(),
        }
    }

    /// Confidence on the 0-100 scale used in claim output
    pub fn percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Round `value` to `decimals` places (half away from zero)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
