//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `path` is the file the configuration was loaded from (or would be).
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.info(&format!("Config file: {}", path.display())));
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            init_config(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default config to {}", path.display()))
            );
        }
    }

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        assert!(matches!(init_config(&path, false), Err(CliError::Config(_))));
        init_config(&path, true).unwrap();
        assert!(Config::load_from(&path).unwrap().settings.color);
    }
}
