//! TruthLens Router CLI
//!
//! Starts the HTTP server for hallucination scoring.

use std::env;
use std::process;
use tracing_subscriber::EnvFilter;
use truthlens_router::{config::RouterConfig, start_server, RouterError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        RouterConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        tracing::warn!("No config file specified, using defaults");
        RouterConfig::default()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("TruthLens Router - AI Hallucination Detection Service");
    println!();
    println!("USAGE:");
    println!("    truthlens-router [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default '0.0.0.0')");
    println!("    - bind_port: Port number (default 8000)");
    println!("    - [engine]: weights, thresholds and verified_threshold");
    println!("    - [verifier]: max_text_length, max_claims, min_claim_length");
    println!();
    println!("    Log level is taken from RUST_LOG (default: info).");
}
