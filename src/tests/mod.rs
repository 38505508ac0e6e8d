//! Test modules for Niihau.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Dictionary loading from files
//! - Property-based tests of the trie using proptest
//! - Shared fixtures and strategies

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{invalid_word_strategy, word_strategy, TestFixture};
