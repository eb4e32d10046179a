//! Main Verifier implementation

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};
use truthlens_domain::{round_to, ClaimVerdict, RiskLevel};
use truthlens_engine::ScoringEngine;

use crate::{ClaimSegmenter, VerificationReport, VerifierConfig, VerifierError};

/// Verified share at or above which the aggregate risk is low
const LOW_RISK_VERIFIED_RATIO: f64 = 0.8;

/// Verified share at or above which the aggregate risk is medium
const MEDIUM_RISK_VERIFIED_RATIO: f64 = 0.5;

/// Verifies blocks of text claim by claim
#[derive(Debug, Clone)]
pub struct Verifier {
    engine: ScoringEngine,
    segmenter: ClaimSegmenter,
    config: VerifierConfig,
}

impl Verifier {
    /// Create a new Verifier
    pub fn new(engine: ScoringEngine, config: VerifierConfig) -> Result<Self, VerifierError> {
        config.validate().map_err(VerifierError::Config)?;

        Ok(Self {
            engine,
            segmenter: ClaimSegmenter::new(),
            config,
        })
    }

    /// Create a Verifier with default engine and verifier configuration
    pub fn with_defaults() -> Result<Self, VerifierError> {
        Self::new(ScoringEngine::with_defaults()?, VerifierConfig::default())
    }

    /// The underlying scoring engine
    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// The verifier configuration
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Reject empty or oversized input
    pub fn validate_input(&self, text: &str) -> Result<(), VerifierError> {
        if text.trim().is_empty() {
            return Err(VerifierError::EmptyText);
        }

        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(VerifierError::TextTooLong {
                max: self.config.max_text_length,
                actual: length,
            });
        }

        Ok(())
    }

    /// Verify `text`, drawing mock source counts from the thread RNG
    pub fn verify(&self, text: &str) -> Result<VerificationReport, VerifierError> {
        self.verify_with_rng(text, &mut rand::thread_rng())
    }

    /// Verify `text` with an explicit random number source
    pub fn verify_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> Result<VerificationReport, VerifierError> {
        let started = Instant::now();
        self.validate_input(text)?;

        let segments = self.segmenter.segment(text);
        debug!(segments = segments.len(), "Segmented input");

        // Cap first, then drop trivial segments
        let mut claims = Vec::new();
        for segment in segments.iter().take(self.config.max_claims) {
            if segment.chars().count() > self.config.min_claim_length {
                claims.push(self.engine.analyze_claim_with(segment, rng));
            }
        }

        let used_fallback = claims.is_empty();
        let (overall, risk) = if used_fallback {
            let (verdict, risk) = self.fallback_claim(text);
            let overall = verdict.confidence;
            claims.push(verdict);
            (overall, risk)
        } else {
            let mean = claims.iter().map(|c| c.confidence).sum::<f64>() / claims.len() as f64;
            let verified = claims.iter().filter(|c| c.verified).count();
            (round_to(mean, 1), aggregate_risk(verified, claims.len()))
        };

        let processing_time = round_to(started.elapsed().as_secs_f64(), 3);

        info!(
            claims = claims.len(),
            overall_score = overall,
            risk = %risk,
            fallback = used_fallback,
            "Verification complete"
        );

        Ok(VerificationReport {
            overall_score: overall,
            confidence: overall,
            hallucination_risk: risk,
            claims,
            processing_time,
            timestamp: chrono::Utc::now().to_rfc3339(),
            used_fallback,
        })
    }

    /// Score the whole text as one synthetic claim
    fn fallback_claim(&self, text: &str) -> (ClaimVerdict, RiskLevel) {
        let result = self.engine.score(text);

        let verdict = ClaimVerdict {
            claim: text.chars().take(self.config.fallback_claim_chars).collect(),
            verified: self.engine.is_verified(result.confidence),
            confidence: round_to(result.percent(), 1),
            sources: self.config.fallback_sources,
            risk_level: result.risk,
        };

        (verdict, result.risk)
    }
}

/// Aggregate risk from the share of verified claims
///
/// Independent of the engine's per-claim risk tiers. No claims means high risk.
pub fn aggregate_risk(verified: usize, total: usize) -> RiskLevel {
    if total == 0 {
        return RiskLevel::High;
    }

    let ratio = verified as f64 / total as f64;
    if ratio >= LOW_RISK_VERIFIED_RATIO {
        RiskLevel::Low
    } else if ratio >= MEDIUM_RISK_VERIFIED_RATIO {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
