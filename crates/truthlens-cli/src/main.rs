//! TruthLens CLI - Command-line interface for hallucination scoring.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use truthlens_cli::commands;
use truthlens_cli::{Cli, Command, Config, Formatter};

fn main() {
    // Logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> truthlens_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // An explicit path must load cleanly; the default path falls back to defaults
    let (config, path) = match cli.config {
        Some(path) => {
            let path = PathBuf::from(path);
            (Config::load_from(&path)?, path)
        }
        None => {
            let path = Config::path()?;
            let config = Config::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config at {}: {}", path.display(), e);
                Config::default()
            });
            (config, path)
        }
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Score(args) => commands::execute_score(args, &config, &formatter)?,
        Command::Verify(args) => commands::execute_verify(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter)?,
    }

    Ok(())
}
