//! Verification report types

use truthlens_domain::{ClaimVerdict, RiskLevel};

/// Result of verifying a block of text
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    /// Mean claim confidence on a 0-100 scale, one decimal
    pub overall_score: f64,

    /// Same value as `overall_score`
    pub confidence: f64,

    /// Aggregate risk from the share of verified claims
    /// (or the engine tier for the whole-text fallback)
    pub hallucination_risk: RiskLevel,

    /// Per-claim verdicts in input order
    pub claims: Vec<ClaimVerdict>,

    /// Wall-clock processing time in seconds, three decimals
    pub processing_time: f64,

    /// RFC 3339 completion timestamp
    pub timestamp: String,

    /// No segment qualified and the whole text was scored instead
    pub used_fallback: bool,
}

impl VerificationReport {
    /// Number of verified claims
    pub fn verified_count(&self) -> usize {
        self.claims.iter().filter(|c| c.verified).count()
    }
}
