// src/tally/table.rs
// =============================================================================
// The word-frequency table: lowercase word -> how many times we saw it.
//
// It is a thin wrapper around BTreeMap so that:
// - iteration is always in ascending key order (the report depends on it)
// - the only way to change it is `add`, which can only ever increment
//
// Rust concepts:
// - Newtype pattern: a struct with one field to give a type its own API
// - BTreeMap: a sorted map (like Java's TreeMap)
// - entry API: insert-or-update in a single lookup
// =============================================================================

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordTable {
    counts: BTreeMap<String, u64>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word`. The key is the lowercase form, so
    /// "Cat" and "cat" share a counter.
    pub fn add(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        *self.counts.entry(word.to_ascii_lowercase()).or_insert(0) += 1;
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. how many words were added in total
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Entries in ascending lexicographic order of word
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}
