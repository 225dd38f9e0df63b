//! Suggestion ranking over a candidate word list.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::alignment::PenaltyMatcher;
use crate::dictionary::WordList;

/// A suggestion with its alignment penalty against the input word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Alignment penalty (lower is more similar).
    pub penalty: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, penalty: usize) -> Self {
        Suggestion { word, penalty }
    }
}

/// Configuration for suggestion ranking.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Whether to score candidates in parallel.
    pub parallel: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: 10,
            parallel: false,
        }
    }
}

/// Ranks dictionary words by alignment penalty against an input word.
pub struct SuggestionEngine {
    dictionary: WordList,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given word list.
    pub fn new(dictionary: WordList) -> Self {
        SuggestionEngine {
            dictionary,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(dictionary: WordList, config: SuggestionConfig) -> Self {
        SuggestionEngine { dictionary, config }
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.config = config;
    }

    /// Get the word list backing this engine.
    pub fn dictionary(&self) -> &WordList {
        &self.dictionary
    }

    /// Rank every dictionary word against the input and return the best.
    ///
    /// Candidates are scored in dictionary order and stable-sorted by
    /// ascending penalty, so equal-penalty words keep their dictionary
    /// order. At most `max_suggestions` entries are returned. With
    /// `parallel` set, scoring fans out across threads; the collect
    /// preserves candidate order, so the output is identical to the
    /// sequential path.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let matcher = PenaltyMatcher::new(word.to_lowercase());

        let mut scored: Vec<Suggestion> = if self.config.parallel {
            self.dictionary
                .words()
                .par_iter()
                .map(|candidate| Suggestion::new(candidate.clone(), matcher.penalty(candidate)))
                .collect()
        } else {
            self.dictionary
                .words()
                .iter()
                .map(|candidate| Suggestion::new(candidate.clone(), matcher.penalty(candidate)))
                .collect()
        };

        scored.sort_by_key(|suggestion| suggestion.penalty);
        scored.truncate(self.config.max_suggestions);
        scored
    }

    /// Like [`SuggestionEngine::suggest`], returning only the words.
    pub fn suggest_words(&self, word: &str) -> Vec<String> {
        self.suggest(word)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }
}

/// Rank `input` against `candidates` and return the `limit` closest words.
///
/// Candidates are expected to be lowercase, trimmed, and non-empty. They
/// are scored in the given order and stable-sorted by ascending penalty,
/// so ties keep their original relative order. Fewer than `limit` words
/// are returned if the candidate list is smaller.
pub fn rank(input: &str, candidates: &[String], limit: usize) -> Vec<String> {
    let matcher = PenaltyMatcher::new(input.to_lowercase());

    let mut scored: Vec<(usize, &String)> = candidates
        .iter()
        .map(|candidate| (matcher.penalty(candidate), candidate))
        .collect();

    scored.sort_by_key(|&(penalty, _)| penalty);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, word)| word.clone())
        .collect()
}
