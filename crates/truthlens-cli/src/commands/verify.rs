//! Verify command implementation.

use crate::cli::VerifyArgs;
use crate::commands::{build_verifier, read_input};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use rand::{rngs::StdRng, SeedableRng};

/// Execute the verify command.
pub fn execute_verify(args: VerifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(args.input)?;
    let verifier = build_verifier(config)?;

    let report = match args.seed {
        Some(seed) => verifier.verify_with_rng(&text, &mut StdRng::seed_from_u64(seed))?,
        None => verifier.verify(&text)?,
    };

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
