//! Configuration for the Verifier

use serde::{Deserialize, Serialize};

/// Configuration for the Verifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Number of leading segments considered for scoring
    pub max_claims: usize,

    /// Segments must be longer than this (characters, after trimming)
    pub min_claim_length: usize,

    /// Characters of input kept as the synthetic claim when no segment qualifies
    pub fallback_claim_chars: usize,

    /// Source count reported for the synthetic fallback claim
    pub fallback_sources: u32,
}

impl VerifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.max_claims == 0 {
            return Err("max_claims must be greater than 0".to_string());
        }
        if self.fallback_claim_chars == 0 {
            return Err("fallback_claim_chars must be greater than 0".to_string());
        }
        if self.min_claim_length >= self.max_text_length {
            return Err("min_claim_length must be less than max_text_length".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_text_length: 10_000,
            max_claims: 10,
            min_claim_length: 10,
            fallback_claim_chars: 200,
            fallback_sources: 1,
        }
    }
}
