//! Extraction strategies
//!
//! Every strategy turns text into candidate pairs; the extractor admits them
//! through a gatekeeper configured by the strategy.

use crate::config::{ExtractorConfig, Strategy};
use crate::matcher::PatternMatcher;
use crate::normalizer::PhraseNormalizer;
use crate::parser::parse_generated_output;
use crate::stopwords::StopwordAnchor;
use abbrex_domain::CandidatePair;
use abbrex_gatekeeper::ValidationConfig;

/// A way of producing candidate pairs from text
pub trait ExtractionStrategy {
    /// Which configured strategy this is
    fn kind(&self) -> Strategy;

    /// Produce candidates in document order
    fn candidates(&self, text: &str) -> Vec<CandidatePair>;

    /// Admission rules applied to this strategy's candidates
    fn validation_config(&self) -> ValidationConfig {
        ValidationConfig::default()
    }
}

/// Pattern matcher with raw or normalized phrases
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    matcher: PatternMatcher,
    normalizer: Option<PhraseNormalizer>,
}

impl PatternStrategy {
    /// Keep captured phrases as-is (apart from trimming and whitespace collapse)
    pub fn raw() -> Self {
        Self {
            matcher: PatternMatcher::new(),
            normalizer: None,
        }
    }

    /// Run each captured phrase through a normalizer
    pub fn normalized(normalizer: PhraseNormalizer) -> Self {
        Self {
            matcher: PatternMatcher::new(),
            normalizer: Some(normalizer),
        }
    }
}

impl ExtractionStrategy for PatternStrategy {
    fn kind(&self) -> Strategy {
        if self.normalizer.is_some() {
            Strategy::RegexWithNormalization
        } else {
            Strategy::RegexOnly
        }
    }

    fn candidates(&self, text: &str) -> Vec<CandidatePair> {
        let candidates = self.matcher.candidates(text);
        match &self.normalizer {
            None => candidates,
            Some(normalizer) => candidates
                .into_iter()
                .map(|c| CandidatePair::new(normalizer.normalize(&c.phrase), c.abbreviation))
                .collect(),
        }
    }
}

/// Pattern matcher with stop-word trimming and initial-letter alignment
#[derive(Debug, Clone, Default)]
pub struct StopwordAnchoredStrategy {
    matcher: PatternMatcher,
    anchor: StopwordAnchor,
}

impl StopwordAnchoredStrategy {
    /// Use a custom anchor
    pub fn new(anchor: StopwordAnchor) -> Self {
        Self {
            matcher: PatternMatcher::new(),
            anchor,
        }
    }
}

impl ExtractionStrategy for StopwordAnchoredStrategy {
    fn kind(&self) -> Strategy {
        Strategy::StopwordAnchored
    }

    fn candidates(&self, text: &str) -> Vec<CandidatePair> {
        self.matcher
            .candidates(text)
            .into_iter()
            .filter_map(|c| {
                self.anchor
                    .anchor(&c.phrase, &c.abbreviation)
                    .map(|phrase| CandidatePair::new(phrase, c.abbreviation))
            })
            .collect()
    }

    fn validation_config(&self) -> ValidationConfig {
        ValidationConfig::stopword_anchored()
    }
}

/// Line parser applied to the output of a generation call
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratedOutputStrategy;

impl ExtractionStrategy for GeneratedOutputStrategy {
    fn kind(&self) -> Strategy {
        Strategy::GenerativeAssisted
    }

    fn candidates(&self, text: &str) -> Vec<CandidatePair> {
        parse_generated_output(text)
    }
}

/// Build the strategy object selected by a configuration
pub fn strategy_for(config: &ExtractorConfig) -> Box<dyn ExtractionStrategy + Send + Sync> {
    match config.strategy {
        Strategy::RegexOnly => Box::new(PatternStrategy::raw()),
        Strategy::RegexWithNormalization => Box::new(PatternStrategy::normalized(
            PhraseNormalizer::new(config.phrase_overrides.clone()),
        )),
        Strategy::StopwordAnchored => Box::new(StopwordAnchoredStrategy::default()),
        Strategy::GenerativeAssisted => Box::new(GeneratedOutputStrategy),
    }
}
