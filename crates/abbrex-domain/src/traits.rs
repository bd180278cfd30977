//! Trait definitions for external interactions
//!
//! These traits define the boundaries between extraction logic and
//! infrastructure. Implementations live in other crates.

/// Trait for text-generation providers
///
/// Implemented by the infrastructure layer (abbrex-llm). Only the generative
/// extraction strategy calls it.
pub trait TextGenerator {
    /// Error type for generation calls
    type Error;

    /// Generate a completion for a prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for turning a document into a single text blob
///
/// Implemented by the application layer (abbrex-cli). The extractor is
/// agnostic to the document format.
pub trait TextSource {
    /// Error type for extraction failures
    type Error;

    /// Extract the plain text of the document at `path`
    fn extract_text(&self, path: &std::path::Path) -> Result<String, Self::Error>;
}
