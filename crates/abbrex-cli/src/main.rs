//! Abbrex CLI - Build abbreviation indices from documents.

use abbrex_cli::commands;
use abbrex_cli::{Cli, Command, Config, Formatter};
use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) if cli.command.tolerates_broken_config() => {
            warn!("Ignoring unreadable {}: {}", config_path.display(), e);
            Config::default()
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to load {}", config_path.display()))
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
        Command::Index(args) => {
            commands::execute_index(args, &config, &formatter)
                .await
                .context("indexing failed")?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
