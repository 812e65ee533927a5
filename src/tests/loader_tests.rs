//! Loader tests against real temporary files.

use crate::loader::{self, LoaderError};
use crate::tests::test_utils::{create_test_dir, write_word_file, SAMPLE_WORDS};
use crate::trie::Trie;

#[test]
fn test_load_sample_file() {
    let dir = create_test_dir().unwrap();
    let path = write_word_file(&dir, &SAMPLE_WORDS).unwrap();

    let mut trie = Trie::<()>::new();
    let report = loader::load_path(&mut trie, &path).unwrap();

    assert_eq!(report.added, 5);
    assert!(report.is_clean());

    let mut words = trie.words();
    words.sort();
    assert_eq!(words, vec!["abb", "abba", "cab", "can", "cat"]);
}

#[test]
fn test_load_reports_duplicates_with_line_numbers() {
    let dir = create_test_dir().unwrap();
    let path = write_word_file(&dir, &["cat", "cab", "cat", "cat"]).unwrap();

    let mut trie = Trie::<()>::new();
    let report = loader::load_path(&mut trie, &path).unwrap();

    assert_eq!(report.added, 2);
    let lines: Vec<usize> = report.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![3, 4]);
}

#[test]
fn test_load_skips_blank_lines_silently() {
    let dir = create_test_dir().unwrap();
    let path = write_word_file(&dir, &["cat", "", "  ", "cab"]).unwrap();

    let mut trie = Trie::<()>::new();
    let report = loader::load_path(&mut trie, &path).unwrap();

    // Blank lines are neither added nor reported as skipped.
    assert_eq!(report.added, 2);
    assert!(report.is_clean());
}

#[test]
fn test_unopenable_source_fails_fast() {
    let dir = create_test_dir().unwrap();
    let path = dir.path().join("missing.txt");

    let mut trie = Trie::<()>::new();
    let err = loader::load_path(&mut trie, &path).unwrap_err();

    match err {
        LoaderError::SourceUnavailable { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected SourceUnavailable, got: {other}"),
    }
    assert!(trie.is_empty());
}
