//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub async fn execute_config(
    args: ConfigArgs,
    config: &Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", config.redacted().to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
        ConfigAction::Init { force } => {
            if init_config(config_path, force)? {
                println!(
                    "{}",
                    formatter.success(&format!("Wrote {}", config_path.display()))
                );
            } else {
                println!(
                    "{}",
                    formatter.info(&format!(
                        "{} already exists (use --force to overwrite)",
                        config_path.display()
                    ))
                );
            }
        }
    }

    Ok(())
}

/// Write the default configuration, returning whether a file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    Config::default().save_to(path)?;
    Ok(true)
}
