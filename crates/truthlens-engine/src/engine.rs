//! Ensemble combiner, risk classification and claim analysis

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;
use truthlens_domain::{round_to, ClaimVerdict, RiskLevel, ScoreResult};

use crate::{
    EngineConfig, EngineError, FactualModel, FeatureExtractor, LinguisticModel, SemanticModel,
};

/// Range of the mock source count attached to claim verdicts.
///
/// Placeholder until real citation counting exists; the value carries no meaning.
pub const SOURCE_COUNT_RANGE: RangeInclusive<u32> = 1..=5;

/// The scoring engine
///
/// Holds an immutable configuration and compiled patterns; safe to share
/// across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: EngineConfig,
    extractor: FeatureExtractor,
    linguistic: LinguisticModel,
    semantic: SemanticModel,
    factual: FactualModel,
}

impl ScoringEngine {
    /// Create an engine after validating `config`
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        Ok(Self {
            config,
            extractor: FeatureExtractor::new()?,
            linguistic: LinguisticModel,
            semantic: SemanticModel,
            factual: FactualModel::new()?,
        })
    }

    /// Create an engine with the default configuration
    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(EngineConfig::default())
    }

    /// The configuration this engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score `text` through all sub-models and the ensemble
    pub fn score(&self, text: &str) -> ScoreResult {
        let features = self.extractor.extract(text);

        let linguistic_score = self.linguistic.score(&features);
        let semantic_score = self.semantic.score(text);
        let factual_score = self.factual.score(text, &features);

        let w = &self.config.weights;
        let confidence = (linguistic_score * w.linguistic
            + semantic_score * w.semantic
            + factual_score * w.factual)
            .clamp(0.0, 1.0);

        let risk = self.classify(confidence);

        debug!(
            linguistic = linguistic_score,
            semantic = semantic_score,
            factual = factual_score,
            confidence,
            risk = %risk,
            "Scored text"
        );

        ScoreResult {
            confidence,
            risk,
            linguistic_score,
            semantic_score,
            factual_score,
            features,
        }
    }

    /// Map a confidence value to a risk tier
    pub fn classify(&self, confidence: f64) -> RiskLevel {
        self.config.thresholds.classify(confidence)
    }

    /// Whether a confidence in [0, 1] meets the verification threshold
    pub fn is_verified(&self, confidence: f64) -> bool {
        confidence >= self.config.verified_threshold
    }

    /// Analyze a single claim, drawing the mock source count from the thread RNG
    pub fn analyze_claim(&self, claim: &str) -> ClaimVerdict {
        self.analyze_claim_with(claim, &mut rand::thread_rng())
    }

    /// Analyze a single claim with an explicit random number source
    pub fn analyze_claim_with<R: Rng + ?Sized>(&self, claim: &str, rng: &mut R) -> ClaimVerdict {
        let claim = claim.trim();
        let result = self.score(claim);

        ClaimVerdict {
            claim: claim.to_string(),
            verified: self.is_verified(result.confidence),
            confidence: round_to(result.percent(), 1),
            sources: rng.gen_range(SOURCE_COUNT_RANGE),
            risk_level: result.risk,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::OnceLock;

    fn engine() -> &'static ScoringEngine {
        static ENGINE: OnceLock<ScoringEngine> = OnceLock::new();
        ENGINE.get_or_init(|| ScoringEngine::with_defaults().unwrap())
    }

    proptest! {
        /// Property: every score lies in [0, 1]
        #[test]
        fn test_scores_in_unit_interval(text in ".{0,200}") {
            let result = engine().score(&text);
            for score in [
                result.confidence,
                result.linguistic_score,
                result.semantic_score,
                result.factual_score,
            ] {
                prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
            }
        }

        /// Property: confidence is the weighted sum of the sub-model scores
        #[test]
        fn test_weighted_sum(text in "[A-Za-z0-9 .,%-]{0,120}") {
            let r = engine().score(&text);
            let expected = 0.30 * r.linguistic_score + 0.40 * r.semantic_score + 0.30 * r.factual_score;
            prop_assert!((r.confidence - expected).abs() < 1e-9);
        }

        /// Property: risk is a step function of confidence
        #[test]
        fn test_risk_step_function(confidence in 0.0f64..=1.0) {
            let risk = engine().classify(confidence);
            let expected = if confidence >= 0.80 {
                RiskLevel::Low
            } else if confidence >= 0.60 {
                RiskLevel::Medium
            } else {
                RiskLevel::High
            };
            prop_assert_eq!(risk, expected);
        }

        /// Property: scoring is idempotent
        #[test]
        fn test_idempotent(text in ".{0,200}") {
            prop_assert_eq!(engine().score(&text), engine().score(&text));
        }
    }
}
