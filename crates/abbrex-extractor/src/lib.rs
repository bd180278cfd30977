//! Abbrex Extractor
//!
//! Builds abbreviation indices ("full phrase (ABBR)" definitions) from
//! unstructured document text.
//!
//! # Overview
//!
//! The Extractor scans plain text for abbreviation definitions, cleans each
//! captured phrase, validates each abbreviation and renders a deduplicated,
//! alphabetically ordered index. Document format readers live outside this
//! crate; the extractor only ever sees a single text string.
//!
//! # Architecture
//!
//! ```text
//! Text → Pattern Matcher ─┐
//!                         ├→ Candidates → Gatekeeper → Index → Report
//! Text → LLM → Parser ────┘
//! ```
//!
//! # Strategies
//!
//! - **RegexOnly**: pattern matcher, raw captured phrases
//! - **RegexWithNormalization**: pattern matcher plus phrase normalizer
//! - **StopwordAnchored**: pattern matcher plus stop-word trimming
//! - **GenerativeAssisted**: a text generator lists definitions, the
//!   line parser extracts them
//!
//! # Example Usage
//!
//! ```no_run
//! use abbrex_extractor::{Extractor, ExtractorConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default());
//!
//! let report = extractor
//!     .build_report("We use weighted degree centrality (WDC).")
//!     .await?;
//!
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod matcher;
mod normalizer;
mod stopwords;
mod parser;
mod prompt;
mod strategy;
mod extractor;


pub use error::ExtractorError;
pub use config::{
    ExtractorConfig, Strategy, DEFAULT_GENERATION_TIMEOUT_SECS, GENERATION_INPUT_LIMIT,
};
pub use types::{
    BatchReport, Document, DocumentOutcome, DocumentReport, ExtractionMetadata,
    ExtractionResult, FAILURE_PLACEHOLDER, NO_ABBREVIATIONS_MESSAGE,
};
pub use matcher::{dehyphenate, prepare_input, PatternMatcher};
pub use normalizer::{PhraseNormalizer, CANONICAL_TERMS, CONNECTORS};
pub use stopwords::{StopwordAnchor, LEADING_STOPWORDS};
pub use parser::parse_generated_output;
pub use prompt::PromptBuilder;
pub use strategy::{
    strategy_for, ExtractionStrategy, GeneratedOutputStrategy, PatternStrategy,
    StopwordAnchoredStrategy,
};
pub use extractor::{Extractor, NoGenerator};
