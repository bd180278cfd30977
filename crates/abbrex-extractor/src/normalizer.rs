//! Phrase normalization: trailing capitalized term isolation and canonical overrides

use abbrex_domain::collapse_whitespace;

/// Tokens treated as glue inside a capitalized term
pub const CONNECTORS: &[&str] = &["of", "and", "&", "the", "for"];

/// Canonical terms that replace any normalized phrase containing them.
///
/// Tied to the research-collaboration corpus the extractor was tuned on.
pub const CANONICAL_TERMS: &[&str] = &[
    "weighted degree centrality",
    "structural holes",
    "research strength",
    "age of organization",
    "geographic proximity",
    "collaborations",
];

/// Reduces a greedy phrase capture to its best-guess full form
#[derive(Debug, Clone)]
pub struct PhraseNormalizer {
    overrides: Vec<String>,
}

impl Default for PhraseNormalizer {
    fn default() -> Self {
        Self::new(CANONICAL_TERMS.iter().map(|term| term.to_string()).collect())
    }
}

impl PhraseNormalizer {
    /// Create a normalizer with the given override terms
    pub fn new(overrides: Vec<String>) -> Self {
        Self { overrides }
    }

    /// Create a normalizer without override terms
    pub fn without_overrides() -> Self {
        Self::new(Vec::new())
    }

    /// Normalize a captured phrase
    pub fn normalize(&self, phrase: &str) -> String {
        let collapsed = collapse_whitespace(phrase);
        let narrowed = trailing_capitalized_term(&collapsed).unwrap_or(collapsed);
        self.apply_overrides(narrowed)
    }

    fn apply_overrides(&self, phrase: String) -> String {
        let lowered = phrase.to_lowercase();
        self.overrides
            .iter()
            .find(|term| lowered.contains(&term.to_lowercase()))
            .cloned()
            .unwrap_or(phrase)
    }
}

/// Walk tokens from the end while they are capitalized or connectors.
///
/// Returns the collected run when it spans at least two tokens.
fn trailing_capitalized_term(phrase: &str) -> Option<String> {
    let tokens: Vec<&str> = phrase.split(' ').collect();
    let run = tokens
        .iter()
        .rev()
        .take_while(|&&token| is_capitalized(token) || CONNECTORS.contains(&token))
        .count();

    (run >= 2).then(|| tokens[tokens.len() - run..].join(" "))
}

fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}
