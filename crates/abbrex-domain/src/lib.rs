//! Abbrex Domain Layer
//!
//! This crate contains the core value objects and collaborator interfaces for
//! abbreviation extraction. It has ZERO external dependencies and defines the
//! concepts that the extractor, gatekeeper and provider crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Candidate Pair**: a transient `(phrase, abbreviation)` produced per match
//! - **Abbreviation Index**: abbreviation → phrase mapping, keys unique,
//!   first writer wins, immutable once built
//! - **Collaborators**: text generation and document text extraction live
//!   behind traits; implementations live in other crates
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value logic only
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod index;
pub mod traits;

// Re-exports for convenience
pub use candidate::{collapse_whitespace, trim_stop_symbols, CandidatePair, STOP_SYMBOLS};
pub use index::{AbbreviationIndex, IndexBuilder, IndexEntry};
