//! Test modules for the Koa Trie crate.
//!
//! This module contains cross-component testing infrastructure:
//! - Property-based tests for the trie core using proptest
//! - Loader tests against real temporary files
//! - Configuration and error-path tests
//! - Shared fixtures and strategies in `test_utils`

pub mod loader_tests;
pub mod trie_tests;
