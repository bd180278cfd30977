//! Abbreviation index: the per-document result of an extraction pass

use crate::candidate::CandidatePair;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// A single `abbreviation → phrase` entry in a built index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry<'a> {
    /// Abbreviation (unique key)
    pub abbreviation: &'a str,
    /// Phrase recorded for the abbreviation
    pub phrase: &'a str,
}

impl fmt::Display for IndexEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.abbreviation, self.phrase)
    }
}

/// Accumulates admitted candidates under a first-writer-wins policy.
///
/// A builder lives for exactly one extraction pass; [`IndexBuilder::build`]
/// consumes it, so an index can never be mutated after the pass completes.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    entries: BTreeMap<String, String>,
}

impl IndexBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate unless its abbreviation is already present.
    ///
    /// Returns `true` when the candidate was recorded, `false` when an
    /// earlier candidate already owns the abbreviation.
    pub fn insert(&mut self, candidate: CandidatePair) -> bool {
        match self.entries.entry(candidate.abbreviation) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(candidate.phrase);
                true
            }
        }
    }

    /// Whether an abbreviation has already been recorded
    pub fn contains(&self, abbreviation: &str) -> bool {
        self.entries.contains_key(abbreviation)
    }

    /// Number of recorded abbreviations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the pass and freeze the index
    pub fn build(self) -> AbbreviationIndex {
        AbbreviationIndex {
            entries: self.entries,
        }
    }
}

/// Immutable mapping from abbreviation to phrase.
///
/// Keys are ordered by ordinal (byte-wise, case-sensitive) comparison, which
/// is the order used when the index is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationIndex {
    entries: BTreeMap<String, String>,
}

impl AbbreviationIndex {
    /// Look up the phrase recorded for an abbreviation
    pub fn get(&self, abbreviation: &str) -> Option<&str> {
        self.entries.get(abbreviation).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending abbreviation order
    pub fn iter(&self) -> impl Iterator<Item = IndexEntry<'_>> {
        self.entries.iter().map(|(abbreviation, phrase)| IndexEntry {
            abbreviation,
            phrase,
        })
    }

    /// Render as `"ABBR: phrase"` lines joined by `\n`.
    ///
    /// An empty index renders as the empty string.
    pub fn render(&self) -> String {
        self.iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for AbbreviationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<CandidatePair> for AbbreviationIndex {
    fn from_iter<I: IntoIterator<Item = CandidatePair>>(iter: I) -> Self {
        let mut builder = IndexBuilder::new();
        for candidate in iter {
            builder.insert(candidate);
        }
        builder.build()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: rendered lines are sorted by abbreviation
        #[test]
        fn test_render_order_property(
            pairs in prop::collection::vec(("[a-z]{1,8}", "[A-Z]{1,6}"), 0..20)
        ) {
            let index: AbbreviationIndex = pairs
                .iter()
                .map(|(phrase, abbr)| CandidatePair::new(phrase, abbr))
                .collect();

            let keys: Vec<&str> = index.iter().map(|e| e.abbreviation).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(keys, sorted);
        }

        /// Property: each abbreviation keeps the phrase of its first occurrence
        #[test]
        fn test_first_occurrence_property(
            pairs in prop::collection::vec(("[a-z]{1,8}", "[A-C]{1,2}"), 1..30)
        ) {
            let index: AbbreviationIndex = pairs
                .iter()
                .map(|(phrase, abbr)| CandidatePair::new(phrase, abbr))
                .collect();

            for entry in index.iter() {
                let first = pairs
                    .iter()
                    .find(|(_, abbr)| abbr == entry.abbreviation)
                    .map(|(phrase, _)| phrase.as_str());
                prop_assert_eq!(Some(entry.phrase), first);
            }
        }
    }
}
