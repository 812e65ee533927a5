//! Bulk word loading for the Koa Trie.
//!
//! Thin adapter between line-delimited word sources and [`Trie::add`]. Each
//! non-empty line becomes one insertion; per-line failures (duplicates,
//! empty words) are logged and collected in the returned [`LoadReport`]
//! rather than aborting the load. Only an unusable source is fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::trie::{Trie, TrieError};

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors that can occur while bulk-loading words.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The backing word source could not be opened.
    #[error("Word source unavailable: {}: {source}", .path.display())]
    SourceUnavailable {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The source failed mid-read. A source that dies partway through is
    /// treated as unavailable rather than partially loaded.
    #[error("Failed to read word source at line {line}: {source}")]
    Read {
        /// The 1-based line at which reading failed.
        line: usize,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// One word the loader skipped, with the line it came from and why.
#[derive(Debug)]
pub struct SkippedWord {
    /// 1-based line number in the source.
    pub line: usize,
    /// The word as read (trimmed).
    pub word: String,
    /// Why the insertion was rejected.
    pub error: TrieError,
}

/// Summary of one bulk load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Words successfully inserted.
    pub added: usize,
    /// Words rejected by the trie, in source order.
    pub skipped: Vec<SkippedWord>,
}

impl LoadReport {
    /// True when every non-empty line was inserted.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Loads words from the file at `path`.
///
/// # Errors
///
/// [`LoaderError::SourceUnavailable`] if the file cannot be opened,
/// [`LoaderError::Read`] if it fails mid-read.
pub fn load_path<V, P: AsRef<Path>>(trie: &mut Trie<V>, path: P) -> LoaderResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(trie, BufReader::new(file))
}

/// Loads every non-empty line of `reader` into `trie`.
///
/// Lines are trimmed of surrounding whitespace; blank lines are ignored.
/// Words the trie rejects are recorded in the report and logged, not fatal.
pub fn load_reader<V, R: BufRead>(trie: &mut Trie<V>, reader: R) -> LoaderResult<LoadReport> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| LoaderError::Read {
            line: line_no,
            source,
        })?;

        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        match trie.add(word) {
            Ok(_) => report.added += 1,
            Err(error) => {
                warn!(line = line_no, word, %error, "Skipping word");
                report.skipped.push(SkippedWord {
                    line: line_no,
                    word: word.to_string(),
                    error,
                });
            }
        }
    }

    debug!(
        added = report.added,
        skipped = report.skipped.len(),
        "Bulk load finished"
    );
    Ok(report)
}
