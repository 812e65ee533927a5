//! Error module for the Koa Trie crate.
//!
//! This module provides the umbrella error type used by the binary and by
//! callers composing the library's pieces. Each component defines its own
//! error enum; everything converts into [`KoaError`] for propagation with
//! `?` at the application boundary.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the Koa Trie crate.
pub type KoaResult<T> = Result<T, KoaError>;

/// Core error enum for the Koa Trie crate.
#[derive(Error, Debug)]
pub enum KoaError {
    /// Errors from trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] crate::trie::TrieError),

    /// Errors from bulk word loading.
    #[error("Loader error: {0}")]
    Loader(#[from] crate::loader::LoaderError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are
    /// not defined.
    #[error("{0}")]
    Custom(String),
}
