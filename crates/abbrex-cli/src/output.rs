//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use abbrex_extractor::{BatchReport, DocumentOutcome, DocumentReport, NO_ABBREVIATIONS_MESSAGE};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a batch of per-document reports.
    pub fn format_batch(&self, batch: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_batch_json(batch),
            OutputFormat::Table => Ok(self.format_batch_table(batch)),
            OutputFormat::Text => Ok(self.format_batch_text(batch)),
        }
    }

    fn format_batch_text(&self, batch: &BatchReport) -> String {
        // A lone document prints the bare report
        if let [document] = batch.documents.as_slice() {
            return self.document_body(document);
        }

        batch
            .documents
            .iter()
            .map(|document| {
                format!(
                    "{}\n{}",
                    self.heading(&format!("== {} ==", document.name)),
                    self.document_body(document)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn format_batch_table(&self, batch: &BatchReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Document", "Abbreviation", "Phrase"]);

        for document in &batch.documents {
            match &document.outcome {
                DocumentOutcome::Indexed(result) if result.index.is_empty() => {
                    builder.push_record([document.name.as_str(), "", NO_ABBREVIATIONS_MESSAGE]);
                }
                DocumentOutcome::Indexed(result) => {
                    for entry in result.index.iter() {
                        builder.push_record([
                            document.name.as_str(),
                            entry.abbreviation,
                            entry.phrase,
                        ]);
                    }
                }
                DocumentOutcome::Failed { .. } => {
                    let body = document.render();
                    builder.push_record([document.name.as_str(), "", body.as_str()]);
                }
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_batch_json(&self, batch: &BatchReport) -> Result<String> {
        let documents: Vec<serde_json::Value> = batch
            .documents
            .iter()
            .map(|document| match &document.outcome {
                DocumentOutcome::Indexed(result) => {
                    let abbreviations: serde_json::Map<String, serde_json::Value> = result
                        .index
                        .iter()
                        .map(|entry| (entry.abbreviation.to_string(), entry.phrase.into()))
                        .collect();
                    let status = if result.index.is_empty() { "empty" } else { "indexed" };
                    serde_json::json!({
                        "name": document.name,
                        "status": status,
                        "abbreviations": abbreviations,
                        "metadata": {
                            "strategy": result.metadata.strategy,
                            "input_chars": result.metadata.input_chars,
                            "candidates_seen": result.metadata.candidates_seen,
                            "admitted": result.metadata.admitted,
                            "processing_time_ms": result.metadata.processing_time_ms,
                        }
                    })
                }
                DocumentOutcome::Failed { reason } => serde_json::json!({
                    "name": document.name,
                    "status": "failed",
                    "reason": reason,
                }),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&documents)?)
    }

    fn document_body(&self, document: &DocumentReport) -> String {
        let body = document.render();
        match &document.outcome {
            DocumentOutcome::Failed { .. } => self.colorize(&body, "red"),
            DocumentOutcome::Indexed(result) if result.index.is_empty() => {
                self.colorize(&body, "yellow")
            }
            DocumentOutcome::Indexed(_) => body,
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
