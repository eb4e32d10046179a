//! TruthLens Domain Layer
//!
//! Value types shared by every TruthLens crate. This crate has ZERO runtime
//! dependencies; scoring logic lives in `truthlens-engine` and transport
//! concerns live in the router and CLI.
//!
//! ## Key Concepts
//!
//! - **FeatureSet**: Numeric signals extracted from a piece of text
//! - **ScoreResult**: Sub-model scores, ensemble confidence and risk tier
//! - **ClaimVerdict**: Per-claim outcome reported to callers
//! - **RiskLevel**: Coarse bucket (low → medium → high) derived from confidence

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod features;
pub mod risk;
pub mod score;
pub mod verdict;

// Re-exports for convenience
pub use features::FeatureSet;
pub use risk::RiskLevel;
pub use score::{round_to, ScoreResult};
pub use verdict::ClaimVerdict;
