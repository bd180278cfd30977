//! Error types for the Extractor

use abbrex_gatekeeper::GatekeeperError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Text-generation call failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// Text-generation call did not finish in time
    #[error("Generation timeout after {0} seconds")]
    Timeout(u64),

    /// Strategy name not recognised
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<GatekeeperError> for ExtractorError {
    fn from(e: GatekeeperError) -> Self {
        ExtractorError::Config(e.to_string())
    }
}
