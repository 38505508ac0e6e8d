//! Error types for the Niihau Trie.
//!
//! Queries never surface these; invalid characters and missing paths are
//! negative results there. They are visible through
//! [`super::NiihauTrie::try_insert`] to callers that want to know why a word
//! was rejected.

/// Errors that can occur in Niihau Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NiihauTrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a character does not lowercase to a letter in 'a'..='z'.
    #[error("Invalid character {ch:?} at position {position} in '{word}'")]
    InvalidCharacter {
        /// The word that was rejected.
        word: String,
        /// The offending character.
        ch: char,
        /// Character position (not byte offset) of the offending character.
        position: usize,
    },
}
