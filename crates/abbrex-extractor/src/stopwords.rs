//! Stop-word-anchored phrase trimming
//!
//! An alternative to [`crate::normalizer`] for wide phrase captures: leading
//! low-information words are dropped, then the phrase is aligned to the
//! first word sharing the abbreviation's initial.

use abbrex_domain::STOP_SYMBOLS;
use std::collections::HashSet;

/// Leading words stripped from the front of a captured phrase
pub const LEADING_STOPWORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "we", "therefore", "then", "shows", "use", "using", "used",
    "pending", "which", "that", "are", "is", "was", "were", "applied", "measured", "replaced",
    "similar", "from", "of", "for", "in", "on", "with", "to", "by",
];

/// Longest phrase kept, counted from the end
pub const MAX_ANCHORED_TOKENS: usize = 8;

/// Trims captured phrases using a leading stop-word set
#[derive(Debug, Clone)]
pub struct StopwordAnchor {
    stopwords: HashSet<String>,
    max_tokens: usize,
}

impl Default for StopwordAnchor {
    fn default() -> Self {
        Self::from_list(LEADING_STOPWORDS)
    }
}

impl StopwordAnchor {
    /// Create an anchor from a custom stop-word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            max_tokens: MAX_ANCHORED_TOKENS,
        }
    }

    /// Check if a word is a leading stop word (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Trim `phrase` for `abbreviation`.
    ///
    /// Returns `None` when nothing but stop words remain. The result is
    /// lower-cased.
    pub fn anchor(&self, phrase: &str, abbreviation: &str) -> Option<String> {
        let tokens: Vec<&str> = phrase
            .split_whitespace()
            .map(|token| token.trim_matches(STOP_SYMBOLS))
            .filter(|token| !token.is_empty())
            .skip_while(|token| self.is_stopword(token))
            .collect();

        if tokens.is_empty() {
            return None;
        }

        let start = abbreviation
            .chars()
            .next()
            .and_then(|initial| tokens.iter().position(|token| same_initial(token, initial)))
            .unwrap_or(0);

        let aligned = &tokens[start..];
        let capped = &aligned[aligned.len().saturating_sub(self.max_tokens)..];

        Some(capped.join(" ").to_lowercase())
    }
}

fn same_initial(token: &str, initial: char) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|first| first.to_lowercase().eq(initial.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_leading_stopwords_and_aligns() {
        let anchor = StopwordAnchor::default();
        assert_eq!(
            anchor.anchor("In this study, the Chinese Academy of Science", "CAS").as_deref(),
            Some("chinese academy of science")
        );
    }

    #[test]
    fn test_only_stopwords_is_discarded() {
        let anchor = StopwordAnchor::default();
        assert_eq!(anchor.anchor("and then we used the", "AB"), None);
        assert_eq!(anchor.anchor(", ;", "AB"), None);
    }

    #[test]
    fn test_no_matching_initial_keeps_all_tokens() {
        let anchor = StopwordAnchor::default();
        assert_eq!(
            anchor.anchor("we applied network density", "XYZ").as_deref(),
            Some("network density")
        );
    }

    #[test]
    fn test_caps_to_last_eight_tokens() {
        let anchor = StopwordAnchor::default();
        let phrase = "alpha b c d e f g h i j k";
        // aligned at "alpha", eleven tokens remain, last eight are kept
        assert_eq!(
            anchor.anchor(phrase, "AK").as_deref(),
            Some("d e f g h i j k")
        );
    }

    #[test]
    fn test_strips_token_punctuation() {
        let anchor = StopwordAnchor::default();
        assert_eq!(
            anchor.anchor("the structural, holes;", "SH").as_deref(),
            Some("structural holes")
        );
    }

    #[test]
    fn test_case_insensitive_stopwords() {
        let anchor = StopwordAnchor::from_list(&["The"]);
        assert!(anchor.is_stopword("THE"));
        assert!(!anchor.is_stopword("and"));
    }
}
