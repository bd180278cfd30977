//! Pattern matcher for `phrase (ABBR)` candidates

use abbrex_domain::CandidatePair;
use regex::Regex;
use std::sync::LazyLock;

/// Phrase: a letter followed by letters, whitespace and `& , - ' /`.
/// Abbreviation: an uppercase letter followed by 1-15 of `A-Z 0-9 & / -` or space.
static CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z][A-Za-z\s&,'/\-]*)\s*\(([A-Z][A-Z0-9&/\- ]{1,15})\)")
        .expect("valid regex")
});

/// Scans raw text for every non-overlapping `phrase (ABBR)` match
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher;

impl PatternMatcher {
    /// Create a matcher
    pub fn new() -> Self {
        Self
    }

    /// Collect candidates in document order
    pub fn candidates(&self, text: &str) -> Vec<CandidatePair> {
        CANDIDATE_RE
            .captures_iter(text)
            .map(|caps| CandidatePair::new(&caps[1], &caps[2]))
            .collect()
    }
}

/// Truncate to `max_input_length` characters, then rejoin words split by
/// hyphenated line wraps.
pub fn prepare_input(text: &str, max_input_length: Option<usize>) -> String {
    let truncated = match max_input_length {
        Some(limit) => truncate_chars(text, limit),
        None => text,
    };
    dehyphenate(truncated)
}

/// Remove `-\n` and `-\r\n` sequences left by PDF text extraction
pub fn dehyphenate(text: &str) -> String {
    text.replace("-\r\n", "").replace("-\n", "")
}

/// Keep at most `limit` characters, respecting char boundaries
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, String)> {
        PatternMatcher::new()
            .candidates(text)
            .into_iter()
            .map(|c| (c.phrase, c.abbreviation))
            .collect()
    }

    #[test]
    fn test_simple_match() {
        assert_eq!(
            pairs("We use weighted degree centrality (WDC) here."),
            vec![("We use weighted degree centrality".to_string(), "WDC".to_string())]
        );
    }

    #[test]
    fn test_multiple_non_overlapping_matches() {
        let found = pairs("alpha beta (AB) and then. Gamma delta (GD).");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].1, "AB");
        assert_eq!(found[1], ("Gamma delta".to_string(), "GD".to_string()));
    }

    #[test]
    fn test_phrase_stops_at_sentence_punctuation() {
        let found = pairs("First sentence. Research strength (RS) matters");
        assert_eq!(found[0].0, "Research strength");
    }

    #[test]
    fn test_connector_punctuation_in_phrase() {
        let found = pairs("research & development (R&D)");
        assert_eq!(found[0], ("research & development".to_string(), "R&D".to_string()));

        let found = pairs("the author's input/output, layer (IO-L2)");
        assert_eq!(found[0].0, "the author's input/output, layer");
        assert_eq!(found[0].1, "IO-L2");
    }

    #[test]
    fn test_lowercase_parenthetical_ignored() {
        assert!(pairs("some words (see below) and more").is_empty());
        assert!(pairs("no pattern here at all").is_empty());
    }

    #[test]
    fn test_abbreviation_too_long_for_pattern() {
        assert!(pairs("some phrase (ABCDEFGHIJKLMNOPQ)").is_empty());
        assert_eq!(pairs("some phrase (ABCDEFGHIJKLMNOP)")[0].1, "ABCDEFGHIJKLMNOP");
    }

    #[test]
    fn test_spaced_abbreviation_captured() {
        assert_eq!(pairs("United States (U S)")[0].1, "U S");
    }

    #[test]
    fn test_phrase_must_start_with_letter() {
        let found = pairs("42 - Geographic proximity (GP)");
        assert_eq!(found[0].0, "Geographic proximity");
    }

    #[test]
    fn test_dehyphenate() {
        assert_eq!(dehyphenate("collabo-\nration (COL)"), "collaboration (COL)");
        assert_eq!(dehyphenate("collabo-\r\nration"), "collaboration");
        assert_eq!(dehyphenate("well-known"), "well-known");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("żółw", 2), "żó");
    }

    #[test]
    fn test_prepare_input() {
        assert_eq!(prepare_input("collabo-\nration (COL)", None), "collaboration (COL)");
        assert_eq!(prepare_input("abcdef", Some(4)), "abcd");
    }
}
