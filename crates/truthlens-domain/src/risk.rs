//! Risk module - coarse hallucination risk tiers

use std::fmt;

/// Hallucination risk tier
///
/// Derived from a confidence value through fixed thresholds:
/// - Low: confidence at or above the high-confidence threshold
/// - Medium: confidence at or above the medium-confidence threshold
/// - High: everything below
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    /// Text reads as reliable
    Low,

    /// Mixed signals
    Medium,

    /// Likely hallucinated or unverifiable
    High,
}

impl RiskLevel {
    /// Get the risk name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Parse a risk level from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid risk level: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_parsing() {
        assert_eq!(RiskLevel::parse("low"), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::parse("Medium"), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::parse("HIGH"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::parse("severe"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "unknown".parse::<RiskLevel>().unwrap_err();
        assert!(err.contains("unknown"));
    }

    #[test]
    fn test_display_matches_as_str() {
        for risk in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert_eq!(risk.to_string(), risk.as_str());
        }
    }

    #[test]
    fn test_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }
}
