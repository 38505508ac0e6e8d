//! Data structures for Niihau.
//!
//! The trie family lives here. Everything in this module is in-memory,
//! synchronous and free of I/O; loading input is the job of
//! [`crate::dictionary`].

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{NiihauTrie, NiihauTrieError, NiihauTrieResult, Suggestion};
