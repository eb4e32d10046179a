//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};

/// TruthLens CLI - Score text for hallucination risk.
#[derive(Debug, Parser)]
#[command(name = "truthlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TRUTHLENS_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (score and risk only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a whole text and show the sub-model breakdown
    Score(ScoreArgs),

    /// Split a text into claims and verify each one
    Verify(VerifyArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Where the text to score comes from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to analyze
    #[arg(conflicts_with_all = ["file", "stdin"])]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'i', long = "file", conflicts_with = "stdin")]
    pub file: Option<String>,

    /// Read the text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Seed for the mock source counts, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration in effect
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_command() {
        let cli = Cli::parse_from(["truthlens", "score", "The sky is blue."]);
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.input.text.as_deref(), Some("The sky is blue."));
                assert!(!args.input.stdin);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_verify_command_with_globals() {
        let cli = Cli::parse_from([
            "truthlens",
            "verify",
            "--file",
            "essay.txt",
            "--seed",
            "7",
            "--format",
            "json",
            "--no-color",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        match cli.command {
            Command::Verify(args) => {
                assert_eq!(args.input.file.as_deref(), Some("essay.txt"));
                assert_eq!(args.seed, Some(7));
            }
            _ => panic!("Expected Verify command"),
        }
    }

    #[test]
    fn test_text_conflicts_with_stdin() {
        let result = Cli::try_parse_from(["truthlens", "score", "some text", "--stdin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["truthlens", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
