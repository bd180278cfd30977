//! Index command implementation.

use crate::cli::IndexArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::reader::PlainTextSource;
use abbrex_domain::traits::{TextGenerator, TextSource};
use abbrex_extractor::{
    BatchReport, Document, DocumentReport, Extractor, ExtractorConfig, Strategy,
    GENERATION_INPUT_LIMIT,
};
use abbrex_llm::GroqProvider;
use std::fmt::Display;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Name given to the document read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// A document ready for extraction, or the report for one that could not be read.
pub type Input = std::result::Result<Document, DocumentReport>;

/// Execute the index command.
pub async fn execute_index(args: IndexArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut inputs = read_inputs(&args.files, &PlainTextSource);
    if args.stdin {
        inputs.push(Ok(read_stdin()?));
    }

    let batch = run_index(&args, config, inputs).await?;

    println!("{}", formatter.format_batch(&batch)?);
    if batch.failed() > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "{} of {} document(s) failed",
                batch.failed(),
                batch.documents.len()
            ))
        );
    }

    Ok(())
}

/// Build the per-document reports for already-read inputs.
pub async fn run_index(args: &IndexArgs, config: &Config, inputs: Vec<Input>) -> Result<BatchReport> {
    if inputs.is_empty() {
        return Err(CliError::InvalidInput(
            "provide at least one file or --stdin".to_string(),
        ));
    }

    let extractor_config = resolve_extractor_config(args, config);

    if extractor_config.strategy.requires_generator() {
        let provider = build_provider(args, config)?;
        index_inputs(&Extractor::with_generator(provider, extractor_config), inputs).await
    } else {
        index_inputs(&Extractor::new(extractor_config), inputs).await
    }
}

/// Read each file through the text source, keeping unreadable files as failures.
pub fn read_inputs<S>(files: &[PathBuf], source: &S) -> Vec<Input>
where
    S: TextSource,
    S::Error: Display,
{
    files
        .iter()
        .map(|path| {
            let name = path.display().to_string();
            match source.extract_text(path) {
                Ok(text) => Ok(Document::new(name, text)),
                Err(e) => {
                    warn!("Could not read '{}': {}", name, e);
                    Err(DocumentReport::failed(name, e.to_string()))
                }
            }
        })
        .collect()
}

/// Apply command-line overrides on top of the configured extractor settings.
pub fn resolve_extractor_config(args: &IndexArgs, config: &Config) -> ExtractorConfig {
    let mut extractor_config = config.extractor.clone();

    if let Some(strategy) = args.strategy {
        extractor_config.strategy = strategy.into();
    }
    if let Some(max_input_length) = args.max_input_length {
        extractor_config.max_input_length = Some(max_input_length);
    }
    if extractor_config.strategy == Strategy::GenerativeAssisted
        && extractor_config.max_input_length.is_none()
    {
        extractor_config.max_input_length = Some(GENERATION_INPUT_LIMIT);
    }

    extractor_config
}

fn build_provider(args: &IndexArgs, config: &Config) -> Result<GroqProvider> {
    let api_key = args
        .api_key
        .clone()
        .or_else(|| config.llm.api_key.clone())
        .ok_or_else(|| {
            CliError::Config(
                "the generative strategy needs an API key (--api-key or GROQ_API_KEY)".to_string(),
            )
        })?;
    let model = args.model.as_deref().unwrap_or(&config.llm.model);
    let endpoint = args.endpoint.as_deref().unwrap_or(&config.llm.endpoint);

    debug!("Using model '{}' at {}", model, endpoint);

    let provider = GroqProvider::new(api_key, model)?
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(config.llm.timeout_secs))?;
    Ok(provider)
}

async fn index_inputs<L>(extractor: &Extractor<L>, inputs: Vec<Input>) -> Result<BatchReport>
where
    L: TextGenerator + Send + Sync + 'static,
    L::Error: Display,
{
    let mut documents = Vec::with_capacity(inputs.len());
    for input in inputs {
        let report = match input {
            Ok(document) => extractor.extract_document(document).await?,
            Err(report) => report,
        };
        documents.push(report);
    }
    Ok(BatchReport { documents })
}

fn read_stdin() -> Result<Document> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(Document::new(STDIN_NAME, String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StrategyArg;
    use abbrex_extractor::{DocumentOutcome, NO_ABBREVIATIONS_MESSAGE};
    use std::fs;

    fn args(files: Vec<PathBuf>) -> IndexArgs {
        IndexArgs {
            files,
            stdin: false,
            strategy: None,
            max_input_length: None,
            api_key: None,
            model: None,
            endpoint: None,
        }
    }

    #[tokio::test]
    async fn test_index_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let missing = dir.path().join("missing.txt");
        let pdf = dir.path().join("paper.pdf");
        let last = dir.path().join("last.txt");
        fs::write(&first, "structural holes (SH)").unwrap();
        fs::write(&pdf, b"%PDF").unwrap();
        fs::write(&last, "nothing to index").unwrap();

        let files = vec![first, missing, pdf, last];
        let inputs = read_inputs(&files, &PlainTextSource);
        let batch = run_index(&args(files), &Config::default(), inputs).await.unwrap();

        assert_eq!(batch.documents.len(), 4);
        assert_eq!(batch.documents[0].render(), "SH: structural holes");
        assert!(batch.documents[1].is_failure());
        assert!(matches!(
            &batch.documents[2].outcome,
            DocumentOutcome::Failed { reason } if reason.contains(".pdf")
        ));
        assert_eq!(batch.documents[3].render(), NO_ABBREVIATIONS_MESSAGE);
    }

    #[tokio::test]
    async fn test_no_inputs_is_invalid() {
        let result = run_index(&args(Vec::new()), &Config::default(), Vec::new()).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_generative_without_key_is_config_error() {
        let mut index_args = args(Vec::new());
        index_args.strategy = Some(StrategyArg::GenerativeAssisted);
        let inputs = vec![Ok(Document::new("a.txt", "alpha beta (AB)"))];

        let result = run_index(&index_args, &Config::default(), inputs).await;
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_max_input_length_is_rejected() {
        let mut index_args = args(Vec::new());
        index_args.max_input_length = Some(0);
        let inputs = vec![Ok(Document::new("a.txt", "alpha beta (AB)"))];

        let result = run_index(&index_args, &Config::default(), inputs).await;
        assert!(matches!(result, Err(CliError::Extractor(_))));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.extractor.max_input_length = Some(100);

        let mut index_args = args(Vec::new());
        index_args.strategy = Some(StrategyArg::StopwordAnchored);
        let resolved = resolve_extractor_config(&index_args, &config);
        assert_eq!(resolved.strategy, Strategy::StopwordAnchored);
        assert_eq!(resolved.max_input_length, Some(100));

        index_args.max_input_length = Some(50);
        assert_eq!(resolve_extractor_config(&index_args, &config).max_input_length, Some(50));
    }

    #[test]
    fn test_generative_input_is_capped() {
        let mut index_args = args(Vec::new());
        index_args.strategy = Some(StrategyArg::GenerativeAssisted);
        let resolved = resolve_extractor_config(&index_args, &Config::default());
        assert_eq!(resolved.max_input_length, Some(GENERATION_INPUT_LIMIT));
    }
}
