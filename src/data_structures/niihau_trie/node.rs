// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Niihau Trie.
//!
//! Each node owns one optional child per letter of the supported alphabet
//! and carries the metadata every query variant needs.

use std::fmt;

/// Number of supported letters ('a' through 'z').
pub const ALPHABET_SIZE: usize = 26;

/// A node in the Niihau Trie.
///
/// Children are uniquely owned, so the structure is a strict tree. Dropping
/// a node frees its subtree iteratively, so word length is not bounded by
/// the thread's stack.
#[derive(Default)]
pub struct TrieNode {
    /// Child slots indexed by letter, 0 = 'a' through 25 = 'z'
    pub children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether an accepted word terminates at this node
    pub is_end: bool,

    /// Number of accepted insertions whose path passes through this node
    pub prefix_count: usize,

    /// Number of frequency-bumping insertions of the word ending here
    pub frequency: usize,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child at `index`, if present.
    pub fn child(&self, index: usize) -> Option<&TrieNode> {
        self.children[index].as_deref()
    }

    /// Returns the child at `index`, creating it when absent.
    pub fn child_or_insert(&mut self, index: usize) -> &mut TrieNode {
        self.children[index].get_or_insert_with(Box::default)
    }

    /// Returns the first present child at or after `from`, with its index.
    pub fn next_child(&self, from: usize) -> Option<(usize, &TrieNode)> {
        self.children
            .get(from..)?
            .iter()
            .enumerate()
            .find_map(|(offset, child)| child.as_deref().map(|node| (from + offset, node)))
    }

    /// Iterates over present children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.as_deref().map(|node| (letter(index), node)))
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl fmt::Debug for TrieNode {
    // Lists child letters only; deriving would recurse through the subtree
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: String = self.children().map(|(c, _)| c).collect();
        f.debug_struct("TrieNode")
            .field("children", &children)
            .field("is_end", &self.is_end)
            .field("prefix_count", &self.prefix_count)
            .field("frequency", &self.frequency)
            .finish()
    }
}

/// Maps a character to its child index after lowercasing.
///
/// Returns `None` unless the character lowercases to exactly one letter in
/// 'a'..='z'.
pub fn index_of(c: char) -> Option<usize> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l @ 'a'..='z'), None) => Some(l as usize - 'a' as usize),
        _ => None,
    }
}

/// Inverse of [`index_of`] for valid indices.
pub fn letter(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_letters() {
        assert_eq!(index_of('a'), Some(0));
        assert_eq!(index_of('z'), Some(25));
        assert_eq!(index_of('Q'), Some(16));
        // Kelvin sign lowercases to ASCII 'k'
        assert_eq!(index_of('\u{212A}'), Some(10));
    }

    #[test]
    fn test_index_of_rejects_non_letters() {
        for c in ['-', '\'', ' ', '0', 'é', 'ß', 'İ'] {
            assert_eq!(index_of(c), None, "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_letter_round_trips_index() {
        for index in 0..ALPHABET_SIZE {
            assert_eq!(index_of(letter(index)), Some(index));
        }
    }

    #[test]
    fn test_children_in_alphabetical_order() {
        let mut node = TrieNode::new();
        node.child_or_insert(25);
        node.child_or_insert(2);
        node.child_or_insert(0);

        let letters: Vec<char> = node.children().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['a', 'c', 'z']);
        assert!(node.child(1).is_none());
    }

    #[test]
    fn test_next_child_skips_empty_slots() {
        let mut node = TrieNode::new();
        node.child_or_insert(3);
        node.child_or_insert(7);

        assert_eq!(node.next_child(0).map(|(i, _)| i), Some(3));
        assert_eq!(node.next_child(4).map(|(i, _)| i), Some(7));
        assert!(node.next_child(8).is_none());
        assert!(node.next_child(ALPHABET_SIZE).is_none());
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut root = TrieNode::new();
        let mut current = &mut root;
        for i in 0..200_000 {
            current = current.child_or_insert(i % ALPHABET_SIZE);
        }
        current.is_end = true;
        drop(root);
    }

    #[test]
    fn test_debug_lists_child_letters() {
        let mut node = TrieNode::new();
        node.child_or_insert(1).child_or_insert(0);
        node.child_or_insert(4);

        let debug = format!("{node:?}");
        assert!(debug.contains(r#"children: "be""#));
        assert!(debug.contains("prefix_count: 0"));
    }
}
