//! Niihau Library
//!
//! This library contains the core components of Niihau: a dictionary trie
//! with exact search, prefix existence, prefix counting and alphabetical or
//! frequency-ranked autocomplete, plus the loader, configuration and query
//! reporting used by the `niihau` binary.
//!
//! # Example
//!
//! ```
//! use niihau_lib::data_structures::NiihauTrie;
//!
//! let mut trie = NiihauTrie::new();
//! for word in ["apple", "app", "apt", "bat"] {
//!     trie.insert(word);
//! }
//!
//! assert!(trie.search("app"));
//! assert!(!trie.search("ap"));
//! assert!(trie.starts_with("ap"));
//! assert_eq!(trie.prefix_count("ap"), 3);
//! assert_eq!(trie.autocomplete("ap", 10), vec!["app", "apple", "apt"]);
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod query;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Niihau.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
