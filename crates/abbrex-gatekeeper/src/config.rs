//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};

/// Configuration for admission rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum abbreviation length (characters)
    pub min_abbreviation_len: usize,

    /// Maximum abbreviation length (characters)
    pub max_abbreviation_len: usize,

    /// Longest abbreviation still admitted when it contains a space
    pub max_spaced_abbreviation_len: usize,

    /// Minimum phrase word count, if enforced
    pub min_phrase_words: Option<usize>,

    /// Maximum phrase word count, if enforced
    pub max_phrase_words: Option<usize>,

    /// Reject abbreviations already present in the index being built
    pub validate_duplicates: bool,
}

impl Default for ValidationConfig {
    /// Rules of the plain pattern matcher
    fn default() -> Self {
        Self {
            min_abbreviation_len: 1,
            max_abbreviation_len: 15,
            max_spaced_abbreviation_len: 5,
            min_phrase_words: None,
            max_phrase_words: None,
            validate_duplicates: true,
        }
    }
}

impl ValidationConfig {
    /// Stricter bounds used by the stop-word-anchored strategy
    pub fn stopword_anchored() -> Self {
        Self {
            min_abbreviation_len: 2,
            max_abbreviation_len: 10,
            min_phrase_words: Some(1),
            max_phrase_words: Some(12),
            ..Self::default()
        }
    }

    /// Check that the bounds are consistent
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.min_abbreviation_len == 0 {
            return Err(GatekeeperError::Config(
                "min_abbreviation_len must be greater than 0".to_string(),
            ));
        }
        if self.min_abbreviation_len > self.max_abbreviation_len {
            return Err(GatekeeperError::Config(format!(
                "min_abbreviation_len {} exceeds max_abbreviation_len {}",
                self.min_abbreviation_len, self.max_abbreviation_len
            )));
        }
        if let (Some(min), Some(max)) = (self.min_phrase_words, self.max_phrase_words) {
            if min > max {
                return Err(GatekeeperError::Config(format!(
                    "min_phrase_words {} exceeds max_phrase_words {}",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert_eq!(config.min_abbreviation_len, 1);
        assert_eq!(config.max_abbreviation_len, 15);
        assert_eq!(config.max_spaced_abbreviation_len, 5);
        assert!(config.validate_duplicates);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stopword_anchored_config() {
        let config = ValidationConfig::stopword_anchored();
        assert_eq!(config.min_abbreviation_len, 2);
        assert_eq!(config.max_abbreviation_len, 10);
        assert_eq!(config.max_phrase_words, Some(12));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = ValidationConfig {
            min_abbreviation_len: 8,
            max_abbreviation_len: 4,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ValidationConfig {
            min_phrase_words: Some(5),
            max_phrase_words: Some(2),
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
