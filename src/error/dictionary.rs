//! Dictionary error module.
//!
//! This module defines error types that may occur while reading a word
//! source into a trie.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during dictionary loading.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the dictionary source cannot be opened.
    #[error("Dictionary source unavailable: {path}: {source}")]
    Unavailable {
        /// Path of the source that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error when reading a line from an open source fails.
    #[error("Failed to read dictionary line {line}: {source}")]
    Read {
        /// 1-based line number that failed
        line: usize,
        /// Underlying I/O error (including invalid UTF-8)
        #[source]
        source: std::io::Error,
    },
}
