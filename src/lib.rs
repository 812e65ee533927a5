//! Koa Trie Library
//!
//! This library contains the core components of the Koa Trie crate: the
//! compact code-point trie itself, the bulk word loader, and the
//! configuration and error plumbing shared with the binary. The library is
//! designed to be used by the binary crate, but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - Strict component boundaries: the trie core never does IO or logging
//! - Explicit error types per component, composed at the application edge
//! - Synchronous, single-owner mutation; exclusivity via the borrow checker
//! - Deterministic traversal wherever output is observable

// Re-export public modules
pub mod config;
pub mod error;
pub mod loader;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the Koa Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::KoaResult<()> {
    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
