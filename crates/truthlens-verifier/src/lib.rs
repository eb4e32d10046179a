//! TruthLens Verifier
//!
//! Splits free text into candidate claims, scores each one with the
//! [`truthlens_engine::ScoringEngine`] and aggregates the per-claim verdicts
//! into a single report.
//!
//! # Architecture
//!
//! ```text
//! Text → validate → ClaimSegmenter → ScoringEngine (per claim) → VerificationReport
//! ```
//!
//! The aggregate risk is computed from the share of verified claims, not from
//! the engine's per-claim risk tiers.
//!
//! # Example Usage
//!
//! ```no_run
//! use truthlens_engine::ScoringEngine;
//! use truthlens_verifier::{Verifier, VerifierConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ScoringEngine::with_defaults()?;
//! let verifier = Verifier::new(engine, VerifierConfig::default())?;
//!
//! let report = verifier.verify("Water boils at 100 degrees. The moon is made of cheese.")?;
//! println!("{} ({})", report.overall_score, report.hallucination_risk);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod segment;
mod types;
mod verifier;

pub use config::VerifierConfig;
pub use error::VerifierError;
pub use segment::{ClaimSegmenter, SENTENCE_DELIMITERS};
pub use types::VerificationReport;
pub use verifier::{aggregate_risk, Verifier};
