//! Process-lifetime verification counters for the `/stats` endpoint.
//!
//! Counters live in memory only and reset on restart.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use truthlens_domain::RiskLevel;
use truthlens_verifier::VerificationReport;

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    /// Completed `/verify` requests
    pub total_verifications: u64,
    /// Reports whose aggregate risk was high
    pub hallucinations_detected: u64,
    /// Claims scored across all reports
    pub claims_analyzed: u64,
    /// Claims that met the verification threshold
    pub claims_verified: u64,
    /// Mean processing time per verification, seconds
    pub average_processing_time: f64,
    /// Seconds since the tracker was created
    pub uptime_seconds: u64,
}

/// Lock-free verification counters
pub struct StatsTracker {
    started: Instant,
    total_verifications: AtomicU64,
    hallucinations_detected: AtomicU64,
    claims_analyzed: AtomicU64,
    claims_verified: AtomicU64,
    processing_micros: AtomicU64,
}

impl StatsTracker {
    /// Create a tracker with all counters at zero
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            total_verifications: AtomicU64::new(0),
            hallucinations_detected: AtomicU64::new(0),
            claims_analyzed: AtomicU64::new(0),
            claims_verified: AtomicU64::new(0),
            processing_micros: AtomicU64::new(0),
        }
    }

    /// Record a completed verification
    pub fn record(&self, report: &VerificationReport) {
        self.total_verifications.fetch_add(1, Ordering::Relaxed);
        if report.hallucination_risk == RiskLevel::High {
            self.hallucinations_detected.fetch_add(1, Ordering::Relaxed);
        }
        self.claims_analyzed
            .fetch_add(report.claims.len() as u64, Ordering::Relaxed);
        self.claims_verified
            .fetch_add(report.verified_count() as u64, Ordering::Relaxed);
        self.processing_micros.fetch_add(
            (report.processing_time * 1_000_000.0).round() as u64,
            Ordering::Relaxed,
        );
    }

    /// Read the current counters
    pub fn snapshot(&self) -> StatsSnapshot {
        let total = self.total_verifications.load(Ordering::Relaxed);
        let micros = self.processing_micros.load(Ordering::Relaxed);
        let average_processing_time = if total == 0 {
            0.0
        } else {
            micros as f64 / total as f64 / 1_000_000.0
        };

        StatsSnapshot {
            total_verifications: total,
            hallucinations_detected: self.hallucinations_detected.load(Ordering::Relaxed),
            claims_analyzed: self.claims_analyzed.load(Ordering::Relaxed),
            claims_verified: self.claims_verified.load(Ordering::Relaxed),
            average_processing_time,
            uptime_seconds: self.started.elapsed().as_secs(),
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
