//! Abbrex Gatekeeper
//!
//! Evaluates candidate pairs before they are admitted into an abbreviation
//! index.
//!
//! The Gatekeeper provides:
//! - Emptiness checks on phrase and abbreviation
//! - Abbreviation length bounds and the spaced-abbreviation rule
//! - Optional phrase word-count bounds
//! - First-writer-wins duplicate detection
//!
//! # Examples
//!
//! ```
//! use abbrex_domain::CandidatePair;
//! use abbrex_gatekeeper::{Gatekeeper, ValidationConfig, ValidationStatus};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//! let candidate = CandidatePair::new("Chinese Academy of Science", "CAS");
//! let result = gatekeeper.validate(&candidate, None);
//! assert_eq!(result.status, ValidationStatus::Accepted);
//! ```

#![warn(missing_docs)]

mod validator;
mod error;
mod config;

pub use validator::{Gatekeeper, ValidationResult, ValidationStatus, RejectionReason};
pub use error::GatekeeperError;
pub use config::ValidationConfig;
