//! Command implementations.

pub mod config;
pub mod score;
pub mod verify;

pub use self::config::execute_config;
pub use self::score::execute_score;
pub use self::verify::execute_verify;

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};
use truthlens_engine::ScoringEngine;
use truthlens_verifier::Verifier;

/// Read the text named by the input arguments.
pub fn read_input(input: InputArgs) -> Result<String> {
    if input.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = input.file {
        Ok(fs::read_to_string(file_path)?)
    } else if let Some(text) = input.text {
        Ok(text)
    } else {
        Err(CliError::InvalidInput(
            "Must provide TEXT, --file or --stdin".to_string(),
        ))
    }
}

/// Build a verifier from the loaded configuration.
pub fn build_verifier(config: &Config) -> Result<Verifier> {
    let engine = ScoringEngine::new(config.engine.clone())?;
    Ok(Verifier::new(engine, config.verifier.clone())?)
}
