//! Differential testing: compare the library against oracles.
//!
//! Each measure is checked against a simple, obviously-correct oracle. If
//! they disagree, the oracle is right.

use super::common::UNICODE_WORDS;
use super::oracles::{oracle_levenshtein, oracle_ngram_distance, oracle_ngrams};
use proptest::prelude::*;
use textdist::{levenshtein_distance, n_gram_distance, ngram_set};

// =============================================================================
// LEVENSHTEIN: library vs oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: library distance equals oracle distance.
    #[test]
    fn diff_levenshtein(a in "[a-z]{0,15}", b in "[a-z]{0,15}") {
        prop_assert_eq!(
            levenshtein_distance(&a, &b),
            oracle_levenshtein(&a, &b),
            "levenshtein_distance({:?}, {:?})", a, b
        );
    }

    /// Differential test: agrees with strsim on arbitrary Unicode.
    #[test]
    fn diff_levenshtein_strsim(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Differential test: multi-byte words don't break char indexing.
    #[test]
    fn diff_levenshtein_unicode(
        a in prop::sample::select(UNICODE_WORDS),
        b in prop::sample::select(UNICODE_WORDS)
    ) {
        prop_assert_eq!(levenshtein_distance(a, b), oracle_levenshtein(a, b));
    }
}

// =============================================================================
// N-GRAM: library vs oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: same windows as the oracle.
    #[test]
    fn diff_ngram_set(s in "\\PC{0,12}", n in 0usize..5) {
        let mut ours: Vec<String> = ngram_set(&s, n).into_iter().map(String::from).collect();
        ours.sort();
        let oracle: Vec<String> = oracle_ngrams(&s, n).into_iter().collect();
        prop_assert_eq!(ours, oracle);
    }

    /// Differential test: same distance, and the same inputs rejected.
    #[test]
    fn diff_ngram_distance(a in "[a-c]{0,10}", b in "[a-c]{0,10}", n in 0usize..6) {
        let ours = n_gram_distance(&a, &b, n).ok();
        let oracle = oracle_ngram_distance(&a, &b, n);
        prop_assert_eq!(ours, oracle, "n_gram_distance({:?}, {:?}, {})", a, b, n);
    }

    /// Differential test: Unicode windows.
    #[test]
    fn diff_ngram_unicode(
        a in prop::sample::select(UNICODE_WORDS),
        b in prop::sample::select(UNICODE_WORDS),
        n in 1usize..4
    ) {
        prop_assert_eq!(n_gram_distance(a, b, n).ok(), oracle_ngram_distance(a, b, n));
    }
}
