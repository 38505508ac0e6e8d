//! Niihau Trie Implementation
//!
//! This module provides a prefix tree over the lowercase alphabet 'a'..='z'
//! for dictionary workloads: exact lookups, prefix existence, prefix
//! counting, alphabetical autocomplete and frequency-ranked autocomplete.
//!
//! Input is case-insensitive. A word containing any character that does not
//! lowercase to a letter is rejected as a whole and leaves the trie
//! untouched.
//!
//! The trie has no internal locking. Insertion takes `&mut self` and every
//! query takes `&self`, so a shared trie is naturally single-writer /
//! multiple-reader.

mod complete;
mod error;
mod node;

pub use complete::Suggestion;
pub use error::NiihauTrieError;
pub use node::ALPHABET_SIZE;
use node::{index_of, TrieNode};

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Niihau Trie is a prefix tree for dictionary lookups and autocomplete.
///
/// Key features:
/// * Case-insensitive insertion and lookup
/// * All-or-nothing insertion (invalid words never create nodes)
/// * Per-prefix counts of accepted insertions
/// * Alphabetical and frequency-ranked completion
#[derive(Debug, Default)]
pub struct NiihauTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct words stored
    words: usize,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word, bumping its frequency.
    ///
    /// # Returns
    ///
    /// `true` if the word was accepted, `false` if it was rejected because it
    /// is empty or contains a character outside 'a'..='z' after lowercasing.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.try_insert(word).is_ok()
    }

    /// Inserts a word, optionally leaving its frequency unchanged.
    ///
    /// With `bump_frequency == false` the word becomes searchable (and still
    /// counts toward prefix counts) but its ranking weight is not raised.
    pub fn insert_with<W>(&mut self, word: W, bump_frequency: bool) -> bool
    where
        W: AsRef<str>,
    {
        self.insert_path(word.as_ref(), bump_frequency).is_ok()
    }

    /// Inserts a word, reporting why it was rejected.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word was inserted.
    /// * `Err(NiihauTrieError)` - The word was rejected; the trie is unchanged.
    pub fn try_insert<W>(&mut self, word: W) -> NiihauTrieResult<()>
    where
        W: AsRef<str>,
    {
        self.insert_path(word.as_ref(), true)
    }

    fn insert_path(&mut self, word: &str, bump_frequency: bool) -> NiihauTrieResult<()> {
        if word.is_empty() {
            return Err(NiihauTrieError::EmptyWord);
        }

        // Validate the whole word before creating any node
        let path = indices(word)?;

        let mut current = &mut self.root;
        current.prefix_count += 1;
        for index in path {
            current = current.child_or_insert(index);
            current.prefix_count += 1;
        }

        if !current.is_end {
            current.is_end = true;
            self.words += 1;
        }
        if bump_frequency {
            current.frequency += 1;
        }

        Ok(())
    }

    /// Checks if a complete word exists in the trie.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.locate(word.as_ref())
            .map_or(false, |node| node.is_end)
    }

    /// Checks if any stored path starts with `prefix`.
    ///
    /// Nodes only exist on paths of accepted words, so this is `true` exactly
    /// when some stored word has `prefix` as a prefix. The empty prefix always
    /// succeeds.
    pub fn starts_with<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        self.locate(prefix.as_ref()).is_some()
    }

    /// Returns how many accepted insertions start with `prefix`.
    ///
    /// Duplicate insertions count every time. The empty prefix returns the
    /// total number of accepted insertions. Invalid or missing prefixes
    /// return 0.
    pub fn prefix_count<P>(&self, prefix: P) -> usize
    where
        P: AsRef<str>,
    {
        self.locate(prefix.as_ref())
            .map_or(0, |node| node.prefix_count)
    }

    /// Returns the frequency of `word`, or 0 if it is not stored.
    pub fn frequency<W>(&self, word: W) -> usize
    where
        W: AsRef<str>,
    {
        match self.locate(word.as_ref()) {
            Some(node) if node.is_end => node.frequency,
            _ => 0,
        }
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of accepted insertions, duplicates included.
    pub fn insertions(&self) -> usize {
        self.root.prefix_count
    }

    /// Walks from the root along `prefix`.
    ///
    /// Returns `None` on the first invalid character or missing child; both
    /// are plain negative results for queries.
    fn locate(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, ch| node.child(index_of(ch)?))
    }
}

/// Converts a word to child indices, failing on the first invalid character.
fn indices(word: &str) -> NiihauTrieResult<Vec<usize>> {
    word.chars()
        .enumerate()
        .map(|(position, ch)| {
            index_of(ch).ok_or_else(|| NiihauTrieError::InvalidCharacter {
                word: word.to_string(),
                ch,
                position,
            })
        })
        .collect()
}
