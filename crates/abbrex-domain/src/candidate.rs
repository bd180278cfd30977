//! Candidate pairs produced by the matchers and parsers

use std::fmt;

/// Characters trimmed from both ends of a captured phrase or abbreviation
/// (in addition to whitespace).
pub const STOP_SYMBOLS: &[char] = &[',', ';', ':', '.'];

/// A `(phrase, abbreviation)` pair captured from text.
///
/// Candidates are transient: they carry no identity beyond their values and
/// only become index entries once the gatekeeper admits them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidatePair {
    /// The expanded full-text form
    pub phrase: String,
    /// The abbreviation the phrase stands for
    pub abbreviation: String,
}

impl CandidatePair {
    /// Create a candidate from raw captured text.
    ///
    /// Both sides are trimmed of whitespace and [`STOP_SYMBOLS`]; runs of
    /// whitespace inside the phrase are collapsed to single spaces.
    pub fn new(phrase: impl AsRef<str>, abbreviation: impl AsRef<str>) -> Self {
        Self {
            phrase: collapse_whitespace(trim_stop_symbols(phrase.as_ref())),
            abbreviation: trim_stop_symbols(abbreviation.as_ref()).to_string(),
        }
    }

    /// Number of whitespace-separated words in the phrase
    pub fn phrase_word_count(&self) -> usize {
        self.phrase.split_whitespace().count()
    }

    /// Length of the abbreviation in characters
    pub fn abbreviation_len(&self) -> usize {
        self.abbreviation.chars().count()
    }

    /// First character of the abbreviation, if any
    pub fn abbreviation_initial(&self) -> Option<char> {
        self.abbreviation.chars().next()
    }
}

impl fmt::Display for CandidatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.phrase, self.abbreviation)
    }
}

/// Trim whitespace and [`STOP_SYMBOLS`] from both ends of `s`.
pub fn trim_stop_symbols(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || STOP_SYMBOLS.contains(&c))
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_collapses() {
        let candidate = CandidatePair::new("  Chinese\n Academy   of Science, ", " CAS ");
        assert_eq!(candidate.phrase, "Chinese Academy of Science");
        assert_eq!(candidate.abbreviation, "CAS");
    }

    #[test]
    fn test_trim_stop_symbols() {
        assert_eq!(trim_stop_symbols(";: word .,"), "word");
        assert_eq!(trim_stop_symbols(" ,;:. "), "");
        assert_eq!(trim_stop_symbols("U.S."), "U.S");
    }

    #[test]
    fn test_counts() {
        let candidate = CandidatePair::new("weighted degree centrality", "WDC");
        assert_eq!(candidate.phrase_word_count(), 3);
        assert_eq!(candidate.abbreviation_len(), 3);
        assert_eq!(candidate.abbreviation_initial(), Some('W'));
    }

    #[test]
    fn test_display() {
        let candidate = CandidatePair::new("structural holes", "SH");
        assert_eq!(candidate.to_string(), "structural holes (SH)");
    }
}
