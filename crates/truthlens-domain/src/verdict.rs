//! Claim verdict module

use crate::RiskLevel;

/// Per-claim outcome
///
/// `verified` and `risk_level` come from independent thresholds and may
/// disagree: a claim at 65% is `Medium` risk yet not verified.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimVerdict {
    /// Claim text, trimmed
    pub claim: String,
    /// Confidence met the verification threshold
    pub verified: bool,
    /// Confidence on a 0-100 scale, one decimal
    pub confidence: f64,
    /// Mock source count in [1, 5]; carries no meaning yet
    pub sources: u32,
    /// Risk tier from the engine thresholds
    pub risk_level: RiskLevel,
}
