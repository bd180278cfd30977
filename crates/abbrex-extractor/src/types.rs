//! Request and response types for extraction

use crate::config::Strategy;
use abbrex_domain::AbbreviationIndex;

/// Rendered in place of an index when a document yields no entries
pub const NO_ABBREVIATIONS_MESSAGE: &str = "No abbreviations found.";

/// Rendered in place of an index when a document could not be processed
pub const FAILURE_PLACEHOLDER: &str = "Error generating abbreviation list. Please try again.";

/// A named document whose text has already been extracted
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name (usually the file name)
    pub name: String,

    /// Plain text of the document
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Result of a single extraction pass
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The finished index
    pub index: AbbreviationIndex,

    /// Metadata about the pass
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction pass
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Strategy that produced the index
    pub strategy: Strategy,

    /// Characters scanned after truncation and de-hyphenation
    pub input_chars: usize,

    /// Candidate pairs produced before admission
    pub candidates_seen: usize,

    /// Candidate pairs admitted into the index
    pub admitted: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Outcome of processing one document
#[derive(Debug, Clone)]
pub enum DocumentOutcome {
    /// Extraction completed (the index may be empty)
    Indexed(ExtractionResult),

    /// Extraction failed for this document only
    Failed {
        /// Reason for failure
        reason: String,
    },
}

/// Per-document entry of a batch
#[derive(Debug, Clone)]
pub struct DocumentReport {
    /// Document name
    pub name: String,

    /// What happened to the document
    pub outcome: DocumentOutcome,
}

impl DocumentReport {
    /// Report a failure for a document that never reached the extractor
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: DocumentOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    /// The index, when extraction succeeded
    pub fn index(&self) -> Option<&AbbreviationIndex> {
        match &self.outcome {
            DocumentOutcome::Indexed(result) => Some(&result.index),
            DocumentOutcome::Failed { .. } => None,
        }
    }

    /// Whether the document failed
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, DocumentOutcome::Failed { .. })
    }

    /// Render the report body: the index, the empty signal, or the failure placeholder
    pub fn render(&self) -> String {
        match &self.outcome {
            DocumentOutcome::Indexed(result) if result.index.is_empty() => {
                NO_ABBREVIATIONS_MESSAGE.to_string()
            }
            DocumentOutcome::Indexed(result) => result.index.render(),
            DocumentOutcome::Failed { reason } => format!("{} ({})", FAILURE_PLACEHOLDER, reason),
        }
    }
}

/// Result of processing a batch of documents
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One report per input document, in input order
    pub documents: Vec<DocumentReport>,
}

impl BatchReport {
    /// Number of documents that produced an index
    pub fn succeeded(&self) -> usize {
        self.documents.iter().filter(|d| !d.is_failure()).count()
    }

    /// Number of documents that failed
    pub fn failed(&self) -> usize {
        self.documents.iter().filter(|d| d.is_failure()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abbrex_domain::CandidatePair;

    fn indexed(name: &str, pairs: &[(&str, &str)]) -> DocumentReport {
        let index: AbbreviationIndex = pairs
            .iter()
            .map(|(phrase, abbr)| CandidatePair::new(phrase, abbr))
            .collect();
        DocumentReport {
            name: name.to_string(),
            outcome: DocumentOutcome::Indexed(ExtractionResult {
                metadata: ExtractionMetadata {
                    strategy: Strategy::RegexOnly,
                    input_chars: 0,
                    candidates_seen: pairs.len(),
                    admitted: index.len(),
                    processing_time_ms: 0,
                },
                index,
            }),
        }
    }

    #[test]
    fn test_render_entries() {
        let report = indexed("a.txt", &[("zulu zone", "ZZ"), ("alpha alpha", "AA")]);
        assert_eq!(report.render(), "AA: alpha alpha\nZZ: zulu zone");
        assert!(!report.is_failure());
    }

    #[test]
    fn test_render_empty_is_distinct_from_failure() {
        let empty = indexed("a.txt", &[]);
        let failed = DocumentReport::failed("b.pdf", "unsupported format");

        assert_eq!(empty.render(), NO_ABBREVIATIONS_MESSAGE);
        assert!(failed.render().starts_with(FAILURE_PLACEHOLDER));
        assert!(failed.render().contains("unsupported format"));
        assert!(failed.index().is_none());
    }

    #[test]
    fn test_batch_counts() {
        let batch = BatchReport {
            documents: vec![
                indexed("a.txt", &[("alpha beta", "AB")]),
                DocumentReport::failed("b.txt", "boom"),
                indexed("c.txt", &[]),
            ],
        };
        assert_eq!(batch.succeeded(), 2);
        assert_eq!(batch.failed(), 1);
    }
}
