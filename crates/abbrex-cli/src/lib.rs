//! Abbrex CLI library.
//!
//! This library provides the core functionality for the `abbrex` command-line
//! interface: document reading, configuration management, command execution
//! and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod reader;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use reader::PlainTextSource;
