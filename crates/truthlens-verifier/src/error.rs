//! Error types for the Verifier

use thiserror::Error;

/// Errors that can occur during verification
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Input is empty or whitespace only
    #[error("Text cannot be empty")]
    EmptyText,

    /// Input exceeds the configured maximum length
    #[error("Text too long (max {max} chars)")]
    TextTooLong {
        /// Configured maximum, in characters
        max: usize,
        /// Actual length, in characters
        actual: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine construction error
    #[error("Engine error: {0}")]
    Engine(#[from] truthlens_engine::EngineError),
}

impl VerifierError {
    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, VerifierError::EmptyText | VerifierError::TextTooLong { .. })
    }
}
