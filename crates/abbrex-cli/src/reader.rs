//! Plain-text document reading.

use crate::error::{CliError, Result};
use abbrex_domain::traits::TextSource;
use std::fs;
use std::path::Path;

/// Extensions of formats that need a dedicated reader: binary documents, and
/// markup whose tags would split definitions like `(<b>NSF</b>)`.
const UNSUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "html", "htm", "xhtml"];

/// Reads any other file as text, replacing invalid UTF-8 sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    type Error = CliError;

    fn extract_text(&self, path: &Path) -> Result<String> {
        if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
            let extension = extension.to_ascii_lowercase();
            if UNSUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
                return Err(CliError::UnsupportedFormat(format!(".{}", extension)));
            }
        }

        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.txt");
        fs::write(&path, "weighted degree centrality (WDC)").unwrap();

        let text = PlainTextSource.extract_text(&path).unwrap();
        assert_eq!(text, "weighted degree centrality (WDC)");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, b"structural holes (SH) \xff").unwrap();

        let text = PlainTextSource.extract_text(&path).unwrap();
        assert!(text.starts_with("structural holes (SH)"));
        assert!(text.ends_with('\u{FFFD}'));
    }

    #[test]
    fn test_binary_formats_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.PDF");
        fs::write(&path, b"%PDF-1.7").unwrap();

        let result = PlainTextSource.extract_text(&path);
        assert!(matches!(result, Err(CliError::UnsupportedFormat(ext)) if ext == ".pdf"));
    }

    #[test]
    fn test_markup_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page.html", "page.HTM"] {
            let path = dir.path().join(name);
            fs::write(&path, "National Science Foundation (<b>NSF</b>)").unwrap();

            let result = PlainTextSource.extract_text(&path);
            assert!(matches!(result, Err(CliError::UnsupportedFormat(_))), "{} was read", name);
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PlainTextSource.extract_text(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
