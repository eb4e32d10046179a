//! Engine configuration

use serde::{Deserialize, Serialize};
use truthlens_domain::RiskLevel;

use crate::EngineError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Ensemble weights for the three sub-models
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelWeights {
    /// Weight of the linguistic sub-model
    pub linguistic: f64,

    /// Weight of the semantic sub-model
    pub semantic: f64,

    /// Weight of the factual sub-model
    pub factual: f64,
}

impl ModelWeights {
    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.linguistic + self.semantic + self.factual
    }
}

impl Default for ModelWeights {
    fn default() -> Self {
        Self {
            linguistic: 0.30,
            semantic: 0.40,
            factual: 0.30,
        }
    }
}

/// Confidence breakpoints for risk classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// At or above this confidence the risk is low
    pub high_confidence: f64,

    /// At or above this confidence (and below `high_confidence`) the risk is medium
    pub medium_confidence: f64,
}

impl RiskThresholds {
    /// Map a confidence value onto a risk tier, checked high to low
    pub fn classify(&self, confidence: f64) -> RiskLevel {
        if confidence >= self.high_confidence {
            RiskLevel::Low
        } else if confidence >= self.medium_confidence {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_confidence: 0.80,
            medium_confidence: 0.60,
        }
    }
}

/// Configuration for the scoring engine
///
/// Immutable once handed to [`crate::ScoringEngine::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sub-model weights
    pub weights: ModelWeights,

    /// Risk tier breakpoints
    pub thresholds: RiskThresholds,

    /// Minimum confidence for a claim to count as verified.
    /// Independent of `thresholds`.
    pub verified_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ModelWeights::default(),
            thresholds: RiskThresholds::default(),
            verified_threshold: 0.70,
        }
    }
}

impl EngineConfig {
    /// Strict preset: higher bars for low risk and verification
    pub fn strict() -> Self {
        Self {
            weights: ModelWeights::default(),
            thresholds: RiskThresholds {
                high_confidence: 0.85,
                medium_confidence: 0.65,
            },
            verified_threshold: 0.75,
        }
    }

    /// Lenient preset: lower bars for low risk and verification
    pub fn lenient() -> Self {
        Self {
            weights: ModelWeights::default(),
            thresholds: RiskThresholds {
                high_confidence: 0.75,
                medium_confidence: 0.55,
            },
            verified_threshold: 0.65,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        let w = &self.weights;
        if ![w.linguistic, w.semantic, w.factual]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
        {
            return Err(EngineError::Config(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        if (w.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::Config(format!(
                "weights must sum to 1.0 (got {})",
                w.total()
            )));
        }

        let t = &self.thresholds;
        for (name, value) in [
            ("high_confidence", t.high_confidence),
            ("medium_confidence", t.medium_confidence),
            ("verified_threshold", self.verified_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::Config(format!(
                    "{} {} is outside [0.0, 1.0]",
                    name, value
                )));
            }
        }
        if t.medium_confidence > t.high_confidence {
            return Err(EngineError::Config(
                "medium_confidence cannot exceed high_confidence".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| EngineError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
