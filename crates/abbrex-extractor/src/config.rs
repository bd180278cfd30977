//! Configuration for the Extractor

use crate::error::ExtractorError;
use crate::normalizer::CANONICAL_TERMS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Input cap applied by the generative preset before prompting
pub const GENERATION_INPUT_LIMIT: usize = 8000;

/// Default bound on one generation call, in seconds
///
/// Kept at or below the HTTP client timeout of the remote provider, so the
/// extractor reports `Timeout` instead of a transport error.
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

/// Extraction strategy
///
/// Serialized by its kebab-case name; deserialization goes through
/// [`FromStr`], so snake_case names are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// Pattern matcher with raw captured phrases
    RegexOnly,
    /// Pattern matcher followed by the phrase normalizer
    RegexWithNormalization,
    /// Pattern matcher followed by stop-word trimming and initial-letter alignment
    StopwordAnchored,
    /// Text generation followed by line parsing of the generated output
    GenerativeAssisted,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::RegexOnly
    }
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 4] = [
        Strategy::RegexOnly,
        Strategy::RegexWithNormalization,
        Strategy::StopwordAnchored,
        Strategy::GenerativeAssisted,
    ];

    /// Canonical (kebab-case) name
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::RegexOnly => "regex-only",
            Strategy::RegexWithNormalization => "regex-with-normalization",
            Strategy::StopwordAnchored => "stopword-anchored",
            Strategy::GenerativeAssisted => "generative-assisted",
        }
    }

    /// Whether the strategy needs a text generator
    pub fn requires_generator(&self) -> bool {
        matches!(self, Strategy::GenerativeAssisted)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ExtractorError;

    /// Accepts kebab-case or snake_case names, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| ExtractorError::UnknownStrategy(s.to_string()))
    }
}

impl TryFrom<String> for Strategy {
    type Error = ExtractorError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.as_str().to_string()
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Extraction strategy
    pub strategy: Strategy,

    /// Maximum input length (characters); unlimited when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_input_length: Option<usize>,

    /// Maximum time for a single generation call (seconds), including the
    /// remote provider's own HTTP timeout
    pub generation_timeout_secs: u64,

    /// Canonical terms that replace a normalized phrase containing them
    pub phrase_overrides: Vec<String>,
}

impl ExtractorConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_input_length == Some(0) {
            return Err(ExtractorError::Config(
                "max_input_length must be greater than 0".to_string(),
            ));
        }
        if self.generation_timeout_secs == 0 {
            return Err(ExtractorError::Config(
                "generation_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.phrase_overrides.iter().any(|term| term.trim().is_empty()) {
            return Err(ExtractorError::Config(
                "phrase_overrides must not contain blank terms".to_string(),
            ));
        }
        Ok(())
    }

    /// Use a different strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Cap the input length
    pub fn with_max_input_length(mut self, max_input_length: usize) -> Self {
        self.max_input_length = Some(max_input_length);
        self
    }
}

impl Default for ExtractorConfig {
    /// Raw-phrase pattern matching over unlimited input
    fn default() -> Self {
        Self {
            strategy: Strategy::RegexOnly,
            max_input_length: None,
            generation_timeout_secs: DEFAULT_GENERATION_TIMEOUT_SECS,
            phrase_overrides: CANONICAL_TERMS.iter().map(|term| term.to_string()).collect(),
        }
    }
}

impl ExtractorConfig {
    /// Preset: pattern matching with phrase normalization
    pub fn normalized() -> Self {
        Self::default().with_strategy(Strategy::RegexWithNormalization)
    }

    /// Preset: stop-word-anchored phrase trimming
    pub fn stopword_anchored() -> Self {
        Self::default().with_strategy(Strategy::StopwordAnchored)
    }

    /// Preset: generative extraction over the first 8000 characters
    pub fn generative() -> Self {
        Self::default()
            .with_strategy(Strategy::GenerativeAssisted)
            .with_max_input_length(GENERATION_INPUT_LIMIT)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
