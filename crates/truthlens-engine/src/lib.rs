//! TruthLens Scoring Engine
//!
//! Scores free text for plausibility of AI-generated hallucination.
//!
//! The engine runs four stages over every input:
//! - Feature extraction (certainty, hedging, specificity, citations)
//! - Linguistic, semantic and factual sub-models
//! - Weighted ensemble combination
//! - Risk classification
//!
//! Every call is a pure function of its input text. The only
//! non-deterministic output is the mock source count attached to claim
//! verdicts, which is drawn from a caller-supplied random number generator.
//!
//! # Examples
//!
//! ```no_run
//! use truthlens_engine::{EngineConfig, ScoringEngine};
//!
//! let engine = ScoringEngine::new(EngineConfig::default())?;
//! let result = engine.score("The Eiffel Tower was completed in 1889.");
//! println!("{} ({})", result.confidence, result.risk);
//! # Ok::<(), truthlens_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod features;
pub mod lexicon;
mod models;

pub use config::{EngineConfig, ModelWeights, RiskThresholds};
pub use engine::{ScoringEngine, SOURCE_COUNT_RANGE};
pub use error::EngineError;
pub use features::FeatureExtractor;
pub use models::{FactualModel, LinguisticModel, SemanticModel};
