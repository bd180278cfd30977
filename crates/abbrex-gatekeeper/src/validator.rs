//! Candidate admission logic

use crate::ValidationConfig;
use abbrex_domain::{trim_stop_symbols, CandidatePair, IndexBuilder};

/// Result of candidate validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the candidate passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the candidate was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Candidate accepted
    Accepted,

    /// Candidate rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Phrase is empty after trimming
    EmptyPhrase,

    /// Abbreviation is empty after trimming
    EmptyAbbreviation,

    /// Abbreviation contains a space and is too long to be a spaced initialism
    SpacedAbbreviation {
        /// Abbreviation length
        len: usize,
        /// Longest spaced abbreviation admitted
        max: usize,
    },

    /// Abbreviation length outside the configured bounds
    AbbreviationLength {
        /// Abbreviation length
        len: usize,
        /// Minimum length
        min: usize,
        /// Maximum length
        max: usize,
    },

    /// Phrase word count outside the configured bounds
    PhraseWordCount {
        /// Phrase word count
        words: usize,
    },

    /// Abbreviation already recorded by an earlier candidate
    Duplicate {
        /// The duplicated abbreviation
        abbreviation: String,
    },
}

/// The Gatekeeper validates candidates before admission into an index
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Access the active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a candidate against the configured rules
    ///
    /// # Arguments
    ///
    /// * `candidate` - The candidate to validate
    /// * `index` - The index under construction, for duplicate detection (optional)
    pub fn validate(
        &self,
        candidate: &CandidatePair,
        index: Option<&IndexBuilder>,
    ) -> ValidationResult {
        let mut reasons = Vec::new();

        // 1. Emptiness
        if trim_stop_symbols(&candidate.phrase).is_empty() {
            reasons.push(RejectionReason::EmptyPhrase);
        }
        if trim_stop_symbols(&candidate.abbreviation).is_empty() {
            reasons.push(RejectionReason::EmptyAbbreviation);
        } else {
            // 2-3. Abbreviation shape
            reasons.extend(self.validate_abbreviation(candidate));
        }

        // Phrase word count
        if let Some(reason) = self.validate_phrase_words(candidate) {
            reasons.push(reason);
        }

        // 4. First writer wins
        if self.config.validate_duplicates {
            if let Some(index) = index {
                if index.contains(&candidate.abbreviation) {
                    reasons.push(RejectionReason::Duplicate {
                        abbreviation: candidate.abbreviation.clone(),
                    });
                }
            }
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }

    fn validate_abbreviation(&self, candidate: &CandidatePair) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();
        let len = candidate.abbreviation_len();

        if candidate.abbreviation.contains(' ') && len > self.config.max_spaced_abbreviation_len {
            reasons.push(RejectionReason::SpacedAbbreviation {
                len,
                max: self.config.max_spaced_abbreviation_len,
            });
        }

        if len < self.config.min_abbreviation_len || len > self.config.max_abbreviation_len {
            reasons.push(RejectionReason::AbbreviationLength {
                len,
                min: self.config.min_abbreviation_len,
                max: self.config.max_abbreviation_len,
            });
        }

        reasons
    }

    fn validate_phrase_words(&self, candidate: &CandidatePair) -> Option<RejectionReason> {
        let words = candidate.phrase_word_count();
        let too_few = self.config.min_phrase_words.is_some_and(|min| words < min);
        let too_many = self.config.max_phrase_words.is_some_and(|max| words > max);

        (too_few || too_many).then_some(RejectionReason::PhraseWordCount { words })
    }
}
