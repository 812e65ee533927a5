//! Property-based tests for the trie core.
//!
//! The unit tests in `src/trie` pin the fixed edge cases; these properties
//! exercise the same contracts across arbitrary Unicode words.

use proptest::prelude::*;

use crate::tests::test_utils::{word_set_strategy, word_strategy, SAMPLE_WORDS};
use crate::trie::{Trie, TrieError};

proptest! {
    #[test]
    fn added_words_are_found(word in word_strategy()) {
        let mut trie = Trie::<()>::new();
        trie.add(&word).unwrap();

        let node = trie.find(&word).unwrap();
        prop_assert!(node.is_terminal());
        prop_assert_eq!(node.prefix(), word);
    }

    #[test]
    fn double_add_reports_duplicate(word in word_strategy()) {
        let mut trie = Trie::<()>::new();
        trie.add(&word).unwrap();

        prop_assert_eq!(
            trie.add(&word),
            Err(TrieError::DuplicateWord(word.clone()))
        );

        // The first insertion's terminal status is unaffected.
        prop_assert!(trie.find(&word).unwrap().is_terminal());
        prop_assert_eq!(trie.len(), 1);
    }

    #[test]
    fn removed_words_are_gone(word in word_strategy()) {
        let mut trie = Trie::<()>::new();
        trie.add(&word).unwrap();
        trie.remove(&word).unwrap();

        let is_not_found = matches!(trie.find(&word), Err(TrieError::NotFound { .. }));
        prop_assert!(is_not_found);
        prop_assert!(trie.is_empty());
    }

    #[test]
    fn words_returns_exact_set(words in word_set_strategy()) {
        let mut trie = Trie::<()>::new();
        for word in &words {
            trie.add(word).unwrap();
        }

        let mut stored = trie.words();
        stored.sort();
        let expected: Vec<String> = words.iter().cloned().collect();
        prop_assert_eq!(stored, expected);
        prop_assert_eq!(trie.len(), words.len());
    }

    #[test]
    fn remove_preserves_unrelated_words(words in word_set_strategy()) {
        let mut trie = Trie::<()>::new();
        for word in &words {
            trie.add(word).unwrap();
        }

        // Remove every other word; the rest must survive untouched.
        let (removed, kept): (Vec<(usize, &String)>, Vec<(usize, &String)>) = words
            .iter()
            .enumerate()
            .partition(|(index, _)| index % 2 == 0);
        let removed: Vec<&String> = removed.into_iter().map(|(_, w)| w).collect();
        let kept: Vec<&String> = kept.into_iter().map(|(_, w)| w).collect();

        for word in &removed {
            trie.remove(word).unwrap();
        }

        for word in &kept {
            prop_assert!(trie.contains(word).unwrap());
        }
        for word in &removed {
            prop_assert!(!trie.contains(word).unwrap());
        }
        prop_assert_eq!(trie.len(), kept.len());
    }

    #[test]
    fn structural_equality_ignores_insertion_order(words in word_set_strategy()) {
        let mut forward = Trie::<()>::new();
        for word in &words {
            forward.add(word).unwrap();
        }

        let mut backward = Trie::<()>::new();
        for word in words.iter().rev() {
            backward.add(word).unwrap();
        }

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn render_is_stable(words in word_set_strategy()) {
        let mut trie = Trie::<()>::new();
        for word in &words {
            trie.add(word).unwrap();
        }

        prop_assert_eq!(trie.render(), trie.render());
        prop_assert_eq!(trie.words(), trie.words());
    }
}

#[test]
fn sample_words_round_trip() {
    let mut trie = Trie::<()>::new();
    for word in SAMPLE_WORDS {
        trie.add(word).unwrap();
    }

    let mut stored = trie.words();
    stored.sort();
    assert_eq!(stored, vec!["abb", "abba", "cab", "can", "cat"]);
}
