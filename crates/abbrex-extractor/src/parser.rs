//! Parse generated output into candidate pairs

use abbrex_domain::{CandidatePair, STOP_SYMBOLS};
use std::collections::HashSet;
use tracing::debug;

/// Bullet glyphs stripped from the start of a line (at most one)
const BULLETS: &[char] = &['-', '•', '*', '·'];

/// Markdown emphasis and quote symbols stripped around each side of a line
const MARKUP_SYMBOLS: &[char] = &['*', '`', '"'];

/// Longest abbreviation accepted from generated output
const MAX_ABBREVIATION_LEN: usize = 15;

/// Longest abbreviation accepted when it contains a space (parenthesised form)
const MAX_SPACED_ABBREVIATION_LEN: usize = 5;

/// Parse line-oriented generated text into candidates.
///
/// Accepts `ABBR: phrase` and `phrase (ABBR)` lines; everything else is
/// ignored. Duplicate `(abbreviation, phrase)` pairs are dropped, keeping
/// the first occurrence.
pub fn parse_generated_output(output: &str) -> Vec<CandidatePair> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for line in output.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match parse_line(line) {
            Some(candidate) => {
                if seen.insert(candidate.clone()) {
                    candidates.push(candidate);
                }
            }
            None => debug!("Ignoring generated line: {}", line),
        }
    }

    candidates
}

/// Parse a single non-empty line
fn parse_line(line: &str) -> Option<CandidatePair> {
    let line = strip_bullet(line);
    parse_colon_form(line).or_else(|| parse_paren_form(line))
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(BULLETS).unwrap_or(line).trim_start()
}

/// `ABBR: phrase`
fn parse_colon_form(line: &str) -> Option<CandidatePair> {
    let (left, right) = line.split_once(':')?;
    let abbreviation = strip_symbols(left);
    let phrase = strip_symbols(right);

    if abbreviation.is_empty() || phrase.is_empty() || abbreviation.contains(char::is_whitespace) {
        return None;
    }
    if abbreviation.chars().count() > MAX_ABBREVIATION_LEN {
        return None;
    }

    Some(CandidatePair::new(phrase, abbreviation))
}

/// `phrase (ABBR)`
fn parse_paren_form(line: &str) -> Option<CandidatePair> {
    let open = line.find('(')?;
    let close = open + line[open..].find(')')?;

    let phrase = strip_symbols(&line[..open]);
    let abbreviation = strip_symbols(&line[open + 1..close]);

    if abbreviation.is_empty() || phrase.is_empty() {
        return None;
    }
    let len = abbreviation.chars().count();
    let spaced = abbreviation.contains(char::is_whitespace);
    if len > MAX_ABBREVIATION_LEN || (spaced && len > MAX_SPACED_ABBREVIATION_LEN) {
        return None;
    }

    Some(CandidatePair::new(phrase, abbreviation))
}

fn strip_symbols(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace() || STOP_SYMBOLS.contains(&c) || MARKUP_SYMBOLS.contains(&c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(output: &str) -> Vec<(String, String)> {
        parse_generated_output(output)
            .into_iter()
            .map(|c| (c.abbreviation, c.phrase))
            .collect()
    }

    #[test]
    fn test_bulleted_colon_line() {
        assert_eq!(
            parsed("- CAS: Chinese Academy of Science"),
            vec![("CAS".to_string(), "Chinese Academy of Science".to_string())]
        );
    }

    #[test]
    fn test_other_bullets_and_markup() {
        let output = "• GP: geographic proximity\n* **SH**: structural holes\n· RS: research strength.";
        assert_eq!(
            parsed(output),
            vec![
                ("GP".to_string(), "geographic proximity".to_string()),
                ("SH".to_string(), "structural holes".to_string()),
                ("RS".to_string(), "research strength".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_lines_rejected() {
        assert!(parsed("not a valid line").is_empty());
        assert!(parsed("Here are the abbreviations I found:").is_empty());
        assert!(parsed("ABCDEFGHIJKLMNOP: too long").is_empty());
        assert!(parsed("CAS:").is_empty());
        assert!(parsed(": orphan phrase").is_empty());
    }

    #[test]
    fn test_paren_form() {
        assert_eq!(
            parsed("weighted degree centrality (WDC)"),
            vec![("WDC".to_string(), "weighted degree centrality".to_string())]
        );
        assert!(parsed("unclosed (WDC").is_empty());
        assert!(parsed("() nothing").is_empty());
        assert!(parsed("long spaced (AB CDEF)").is_empty());
    }

    #[test]
    fn test_any_whitespace_counts_as_spaced() {
        assert!(parsed("AB\tCD: phrase with a tab").is_empty());
        assert!(parsed("AB\u{a0}CD: phrase with a no-break space").is_empty());
        assert!(parsed("tabbed phrase (AB\tCDEF)").is_empty());
        assert_eq!(parsed("United States (U\tS)").len(), 1);
    }

    #[test]
    fn test_colon_rejection_falls_back_to_paren_form() {
        assert_eq!(
            parsed("Computer Science (CS): a field of study"),
            vec![("CS".to_string(), "Computer Science".to_string())]
        );
    }

    #[test]
    fn test_deduplicates_pairs_not_abbreviations() {
        let output = "AB: alpha beta\nAB: alpha beta\nAB: alpha gamma";
        assert_eq!(
            parsed(output),
            vec![
                ("AB".to_string(), "alpha beta".to_string()),
                ("AB".to_string(), "alpha gamma".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert_eq!(parsed("\n\n  \nCAS: Chinese Academy of Science\n\n").len(), 1);
    }
}
