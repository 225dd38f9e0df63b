//! Integration tests for the alignment and suggestion ranking pipeline.

use std::io::Write;

use tempfile::NamedTempFile;
use wordwise::prelude::*;

const SAMPLE_WORDS: &[&str] = &[
    "cat", "cot", "dog", "cats", "bat", "rat", "mat", "hello", "world", "suggest",
];

#[test]
fn test_align_identity() {
    for word in SAMPLE_WORDS {
        assert_eq!(align(word, word), 0, "align({word}, {word}) != 0");
    }
}

#[test]
fn test_align_symmetry() {
    for a in SAMPLE_WORDS {
        for b in SAMPLE_WORDS {
            assert_eq!(align(a, b), align(b, a), "asymmetric for {a} / {b}");
        }
    }
}

#[test]
fn test_align_bounded_by_gap_cost() {
    for a in SAMPLE_WORDS {
        for b in SAMPLE_WORDS {
            let bound = 2 * a.chars().count().max(b.chars().count());
            assert!(align(a, b) <= bound, "align({a}, {b}) exceeds {bound}");
        }
    }
}

#[test]
fn test_align_empty_word() {
    assert_eq!(align("", ""), 0);
    for word in SAMPLE_WORDS {
        assert_eq!(align("", word), 2 * word.chars().count());
        assert_eq!(align(word, ""), 2 * word.chars().count());
    }
}

#[test]
fn test_align_monotonicity_under_insertion() {
    for a in SAMPLE_WORDS {
        for b in SAMPLE_WORDS {
            let base = align(a, b);

            // Appending the same character to both words never increases
            // the penalty.
            let matched = align(&format!("{a}s"), &format!("{b}s"));
            assert!(matched <= base, "appending 's' raised {a}/{b}: {matched} > {base}");

            // Appending mismatched characters costs at most one
            // substitution more.
            let mismatched = align(&format!("{a}x"), &format!("{b}o"));
            assert!(
                mismatched <= base + 3,
                "mismatched append on {a}/{b}: {mismatched} > {base} + 3"
            );
        }
    }
}

#[test]
fn test_align_concrete_scenarios() {
    assert_eq!(align("cat", "cat"), 0);
    assert_eq!(align("cat", "bat"), 1);
    assert_eq!(align("cat", "cot"), 1);
    assert_eq!(align("cat", "dog"), 3);
    assert_eq!(align("", "hello"), 10);
}

#[test]
fn test_rank_top_two() {
    let candidates: Vec<String> = ["cat", "cot", "dog", "cats"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    // "cat" and "cot" tie at penalty 2 and keep their list order.
    assert_eq!(rank("ct", &candidates, 2), vec!["cat", "cot"]);
}

#[test]
fn test_rank_output_is_sorted() {
    let candidates: Vec<String> = SAMPLE_WORDS.iter().map(|w| w.to_string()).collect();

    let ranked = rank("cta", &candidates, candidates.len());
    for pair in ranked.windows(2) {
        assert!(
            align("cta", &pair[0]) <= align("cta", &pair[1]),
            "ranking out of order: {} before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_rank_top_k_bound() {
    let candidates: Vec<String> = ["cat", "cot", "dog", "cats"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    assert_eq!(rank("ct", &candidates, 2).len(), 2);
    assert_eq!(rank("ct", &candidates, 10).len(), 4);
    assert_eq!(rank("ct", &[], 10).len(), 0);
}

#[test]
fn test_suggest_stability_on_ties() {
    let list = WordList::from_words(["bat", "rat", "mat", "cat"]);
    let engine = SuggestionEngine::new(list);

    // "bat", "rat", and "mat" all have penalty 1 against "cat" and must
    // keep their dictionary order behind the exact match.
    let words = engine.suggest_words("cat");
    assert_eq!(words, vec!["cat", "bat", "rat", "mat"]);
}

#[test]
fn test_parallel_matches_sequential() {
    let words: Vec<String> = (0..200)
        .map(|i| format!("word{}{}", i % 17, "ab".repeat(i % 5)))
        .collect();

    let sequential = SuggestionEngine::new(WordList::from_words(&words));
    let parallel = SuggestionEngine::with_config(
        WordList::from_words(&words),
        SuggestionConfig {
            parallel: true,
            ..Default::default()
        },
    );

    for input in ["word3", "wrd", "wordabab", ""] {
        assert_eq!(sequential.suggest(input), parallel.suggest(input));
    }
}

#[test]
fn test_end_to_end_from_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "Cat").unwrap();
    writeln!(temp_file, "cot").unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "dog").unwrap();
    writeln!(temp_file, "cats").unwrap();
    writeln!(temp_file, "cat").unwrap();
    temp_file.flush().unwrap();

    let dictionary = WordList::load_from_file(temp_file.path())?;
    assert_eq!(dictionary.len(), 4);

    let engine = SuggestionEngine::with_config(
        dictionary,
        SuggestionConfig {
            max_suggestions: 2,
            ..Default::default()
        },
    );

    let suggestions = engine.suggest("ct");
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].word, "cat");
    assert_eq!(suggestions[1].word, "cot");
    assert_eq!(suggestions[0].penalty, 2);
    assert_eq!(suggestions[1].penalty, 2);

    Ok(())
}

#[test]
fn test_non_alphabetic_candidates() {
    // Digits are Other: unequal Other characters cost a full cross-class
    // substitution, so "c4t" is no closer to "cat" than "c-t" is.
    assert_eq!(align("c4t", "cat"), 3);
    assert_eq!(align("c4t", "c5t"), 3);

    let list = WordList::from_words(["c4t", "cat"]);
    let engine = SuggestionEngine::new(list);
    let words = engine.suggest_words("c4t");
    assert_eq!(words, vec!["c4t", "cat"]);
}
