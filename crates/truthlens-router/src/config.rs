//! Configuration file parsing for the Router.
//!
//! Loads settings from TOML files including bind address, port and the
//! optional engine and verifier sections.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use truthlens_engine::EngineConfig;
use truthlens_verifier::VerifierConfig;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A section failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Scoring engine settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Verifier settings
    #[serde(default)]
    pub verifier: VerifierConfig,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

/// Default port: 8000
fn default_bind_port() -> u16 {
    8000
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the engine and verifier sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.verifier.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            engine: EngineConfig::default(),
            verifier: VerifierConfig::default(),
        }
    }
}
