//! CLI command definitions and argument parsing.

use abbrex_extractor::Strategy;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Abbrex - Build abbreviation indices from documents.
#[derive(Debug, Parser)]
#[command(name = "abbrex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// `ABBR: phrase` lines per document (default)
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build an abbreviation index for each document
    Index(IndexArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the index command.
#[derive(Debug, Parser)]
pub struct IndexArgs {
    /// Documents to index, each processed independently
    pub files: Vec<PathBuf>,

    /// Also read one document from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Extraction strategy (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Truncate each document to this many characters before scanning
    #[arg(long)]
    pub max_input_length: Option<usize>,

    /// API key for the generative strategy
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model for the generative strategy
    #[arg(long)]
    pub model: Option<String>,

    /// OpenAI-compatible endpoint for the generative strategy
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Strategy options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Raw captured phrases
    RegexOnly,
    /// Captured phrases trimmed to their trailing proper-noun run
    RegexWithNormalization,
    /// Phrases with leading stop words removed, lowercased
    StopwordAnchored,
    /// A text generator lists the definitions
    GenerativeAssisted,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    /// Whether the command can run on defaults when the config file is unreadable
    pub fn tolerates_broken_config(&self) -> bool {
        matches!(
            self,
            Command::Config(ConfigArgs {
                action: ConfigAction::Path | ConfigAction::Init { .. }
            })
        )
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<StrategyArg> for Strategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::RegexOnly => Strategy::RegexOnly,
            StrategyArg::RegexWithNormalization => Strategy::RegexWithNormalization,
            StrategyArg::StopwordAnchored => Strategy::StopwordAnchored,
            StrategyArg::GenerativeAssisted => Strategy::GenerativeAssisted,
        }
    }
}
