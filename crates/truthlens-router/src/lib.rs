//! TruthLens Router
//!
//! HTTP front end for the TruthLens verifier.
//! Each request is scored independently; the only shared mutable state is the
//! lock-free counters behind `/stats`.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod stats;

use config::RouterConfig;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;
use truthlens_engine::ScoringEngine;
use truthlens_verifier::{Verifier, VerifierError};

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Engine or verifier construction error
    #[error("Verifier error: {0}")]
    Verifier(#[from] VerifierError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state described by `config`
pub fn build_state(config: &RouterConfig) -> Result<AppState, RouterError> {
    let engine = ScoringEngine::new(config.engine.clone()).map_err(VerifierError::from)?;
    let verifier = Verifier::new(engine, config.verifier.clone())?;
    Ok(AppState::new(verifier))
}

/// Start the Router HTTP server
///
/// Builds the engine and verifier from `config` and serves until the
/// listener fails. Tracing must be initialized by the caller.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    info!("Starting TruthLens Router");
    info!("Bind address: {}", config.bind_addr());
    info!(
        linguistic = config.engine.weights.linguistic,
        semantic = config.engine.weights.semantic,
        factual = config.engine.weights.factual,
        "Ensemble weights"
    );
    info!("Max text length: {} chars", config.verifier.max_text_length);

    let state = build_state(&config)?;
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
