//! Engine error types

use thiserror::Error;

/// Errors that can occur while building a scoring engine
///
/// Scoring itself never fails; these only surface at construction time.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A detection pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
