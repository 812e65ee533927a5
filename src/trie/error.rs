//! Error types for the Koa Trie.
//!
//! This module defines the error types that can occur during trie operations.
//! The trie itself never logs or swallows a failure; every error is returned
//! to the immediate caller.

/// Errors that can occur in trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// Error when an operation is invoked with a zero-length word.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when adding a word that is already stored.
    #[error("Word '{0}' already exists in trie")]
    DuplicateWord(String),

    /// Error when a word's path is absent, or present but not terminated.
    ///
    /// `matched_prefix` carries the longest prefix of the word that exists
    /// in the trie. When it equals the whole word, the path exists but
    /// nothing was stored ending there.
    #[error("Word '{word}' not found, longest matched prefix: '{matched_prefix}'")]
    NotFound {
        /// The word that was looked up.
        word: String,
        /// The longest matched prefix, possibly empty.
        matched_prefix: String,
    },
}

impl TrieError {
    /// True when the lookup failed on a fully present but non-terminated
    /// path, as opposed to a path that is missing outright.
    pub fn is_unterminated_path(&self) -> bool {
        match self {
            TrieError::NotFound {
                word,
                matched_prefix,
            } => word == matched_prefix,
            _ => false,
        }
    }
}
