//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::matcher::prepare_input;
use crate::prompt::PromptBuilder;
use crate::strategy::{strategy_for, ExtractionStrategy};
use crate::types::{
    BatchReport, Document, DocumentOutcome, DocumentReport, ExtractionMetadata, ExtractionResult,
};
use abbrex_domain::traits::TextGenerator;
use abbrex_domain::{AbbreviationIndex, IndexBuilder};
use abbrex_gatekeeper::Gatekeeper;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Placeholder generator for extractors built without one
#[derive(Debug, Clone, Copy)]
pub enum NoGenerator {}

impl TextGenerator for NoGenerator {
    type Error = Infallible;

    fn generate(&self, _prompt: &str) -> Result<String, Self::Error> {
        match *self {}
    }
}

/// The Extractor builds abbreviation indices from document text
pub struct Extractor<L = NoGenerator> {
    generator: Option<Arc<L>>,
    config: ExtractorConfig,
}

impl Extractor<NoGenerator> {
    /// Create an Extractor without a text generator
    ///
    /// The generative strategy is rejected at call time.
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            generator: None,
            config,
        }
    }
}

impl<L> Extractor<L>
where
    L: TextGenerator + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create an Extractor backed by a text generator
    pub fn with_generator(generator: L, config: ExtractorConfig) -> Self {
        Self {
            generator: Some(Arc::new(generator)),
            config,
        }
    }

    /// Access the active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build the index for one text
    pub async fn build_index(&self, text: &str) -> Result<AbbreviationIndex, ExtractorError> {
        Ok(self.extract(text).await?.index)
    }

    /// Build the sorted `"ABBR: phrase"` report for one text
    ///
    /// Returns an empty string when no abbreviation is found.
    pub async fn build_report(&self, text: &str) -> Result<String, ExtractorError> {
        Ok(self.build_index(text).await?.render())
    }

    /// Run one extraction pass and report metadata alongside the index
    pub async fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractorError> {
        self.check_ready()?;
        self.extract_unchecked(text).await
    }

    /// Process one document, scoping any extraction failure to it
    ///
    /// Only configuration errors are returned as `Err`.
    pub async fn extract_document(
        &self,
        document: Document,
    ) -> Result<DocumentReport, ExtractorError> {
        self.check_ready()?;
        Ok(self.process_document(document).await)
    }

    /// Process documents sequentially, each into its own index
    ///
    /// A failing document is recorded in the report and the batch continues.
    pub async fn extract_batch(
        &self,
        documents: Vec<Document>,
    ) -> Result<BatchReport, ExtractorError> {
        self.check_ready()?;

        info!("Processing batch of {} documents", documents.len());

        let mut reports = Vec::with_capacity(documents.len());
        for document in documents {
            reports.push(self.process_document(document).await);
        }

        let batch = BatchReport { documents: reports };
        info!(
            "Batch complete: {} succeeded, {} failed",
            batch.succeeded(),
            batch.failed()
        );
        Ok(batch)
    }

    /// Reject invalid configuration before any text is scanned
    fn check_ready(&self) -> Result<(), ExtractorError> {
        self.config.validate()?;
        strategy_for(&self.config).validation_config().validate()?;

        if self.config.strategy.requires_generator() && self.generator.is_none() {
            return Err(ExtractorError::Config(format!(
                "strategy '{}' requires a text generator",
                self.config.strategy
            )));
        }
        Ok(())
    }

    async fn process_document(&self, document: Document) -> DocumentReport {
        debug!("Processing document '{}'", document.name);

        let outcome = match self.extract_unchecked(&document.text).await {
            Ok(result) => DocumentOutcome::Indexed(result),
            Err(e) => {
                warn!("Extraction failed for '{}': {}", document.name, e);
                DocumentOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        DocumentReport {
            name: document.name,
            outcome,
        }
    }

    async fn extract_unchecked(&self, text: &str) -> Result<ExtractionResult, ExtractorError> {
        let start_time = Instant::now();
        let strategy = strategy_for(&self.config);

        let prepared = prepare_input(text, self.config.max_input_length);
        let input_chars = prepared.chars().count();

        info!(
            "Starting extraction with strategy '{}', input length {} chars",
            strategy.kind(),
            input_chars
        );

        let source = if strategy.kind().requires_generator() {
            let prompt = PromptBuilder::new(prepared).build();
            debug!("Prompt length: {} chars", prompt.len());

            let response = timeout(self.config.generation_timeout(), self.call_generator(prompt))
                .await
                .map_err(|_| ExtractorError::Timeout(self.config.generation_timeout_secs))??;

            debug!("Generator response length: {} chars", response.len());
            response
        } else {
            prepared
        };

        let (index, candidates_seen) = admit(strategy.as_ref(), &source);

        let metadata = ExtractionMetadata {
            strategy: strategy.kind(),
            input_chars,
            candidates_seen,
            admitted: index.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete: {} candidates, {} admitted",
            metadata.candidates_seen, metadata.admitted
        );

        Ok(ExtractionResult { index, metadata })
    }

    /// Call the text generator
    async fn call_generator(&self, prompt: String) -> Result<String, ExtractorError> {
        let generator = self
            .generator
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(|| ExtractorError::Config("no text generator configured".to_string()))?;

        // Generators are blocking
        tokio::task::spawn_blocking(move || {
            generator
                .generate(&prompt)
                .map_err(|e| ExtractorError::Generation(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Generation(format!("Task join error: {}", e)))?
    }
}

/// Run a strategy over `text` and admit its candidates, first writer wins
fn admit(strategy: &dyn ExtractionStrategy, text: &str) -> (AbbreviationIndex, usize) {
    let gatekeeper = Gatekeeper::new(strategy.validation_config());
    let candidates = strategy.candidates(text);
    let seen = candidates.len();

    let mut builder = IndexBuilder::new();
    for candidate in candidates {
        let validation = gatekeeper.validate(&candidate, Some(&builder));
        if validation.is_accepted() {
            builder.insert(candidate);
        } else {
            debug!("Rejected '{}': {:?}", candidate, validation.reasons);
        }
    }

    (builder.build(), seen)
}
