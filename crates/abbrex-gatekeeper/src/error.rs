//! Gatekeeper error types

use thiserror::Error;

/// Rejected validation settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatekeeperError {
    /// Bounds that no candidate could satisfy
    #[error("invalid validation config: {0}")]
    Config(String),
}
