//! Candidate word lists for suggestion ranking.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// An ordered list of distinct candidate words.
///
/// Entries are trimmed, lowercased, and deduplicated on insertion, so the
/// ranking core can treat the list as already normalized. First-insertion
/// order is preserved: it is the tie-break order used when two candidates
/// rank with equal penalty.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Words in first-insertion order
    words: Vec<String>,
    /// Set of all words for fast membership checks
    seen: HashSet<String>,
}

impl WordList {
    /// Create a new empty word list.
    pub fn new() -> Self {
        WordList {
            words: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Build a word list from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList::new();
        for word in words {
            list.add(word.as_ref());
        }
        list
    }

    /// Add a word to the list.
    ///
    /// The word is trimmed and lowercased first. Returns `false` if the
    /// normalized word is empty or already present.
    pub fn add(&mut self, word: &str) -> bool {
        let normalized = word.trim().to_lowercase();
        if normalized.is_empty() || self.seen.contains(&normalized) {
            return false;
        }
        self.seen.insert(normalized.clone());
        self.words.push(normalized);
        true
    }

    /// Check if a word exists in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(&word.to_lowercase())
    }

    /// Get the number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the words in first-insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Load a word list from a text file with one word per line.
    ///
    /// Lines are trimmed and lowercased; blank lines and duplicates are
    /// skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut list = WordList::new();
        for line in reader.lines() {
            let line = line?;
            list.add(&line);
        }

        Ok(list)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}
