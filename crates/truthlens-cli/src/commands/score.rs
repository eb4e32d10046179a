//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::commands::{build_verifier, read_input};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(args.input)?;
    let verifier = build_verifier(config)?;

    // Same limits as claim verification
    verifier.validate_input(&text)?;

    let result = verifier.engine().score(&text);
    tracing::debug!(confidence = result.confidence, risk = %result.risk, "Scored text");

    println!("{}", formatter.format_score(&result)?);
    Ok(())
}
