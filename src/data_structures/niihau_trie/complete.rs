// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Autocomplete queries for the Niihau Trie.
//!
//! Two flavors are provided:
//!
//! - [`NiihauTrie::autocomplete`] walks the subtree depth-first in
//!   alphabetical order and stops as soon as `limit` words are collected, so
//!   the work is bounded by `limit` rather than by the subtree size.
//! - [`NiihauTrie::autocomplete_ranked`] has to see every candidate before it
//!   can rank them, so it enumerates the whole subtree, sorts by frequency
//!   (descending) then word (ascending) and truncates.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::node::{index_of, letter, TrieNode};
use super::NiihauTrie;

/// A ranked completion: a stored word and how often it was inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The completed word, lowercase
    pub word: String,

    /// Number of frequency-bumping insertions of the word
    pub frequency: usize,
}

impl Suggestion {
    /// Creates a new suggestion.
    pub fn new<W: Into<String>>(word: W, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }

    /// Ranking order: higher frequency first, then code-point order of words.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl NiihauTrie {
    /// Returns up to `limit` words starting with `prefix`, in alphabetical
    /// depth-first order.
    ///
    /// A word always precedes its own extensions ("app" before "apple").
    ///
    /// # Returns
    ///
    /// An empty vector when `limit` is 0, when `prefix` contains an invalid
    /// character or when no stored word starts with `prefix`.
    pub fn autocomplete<P>(&self, prefix: P, limit: usize) -> Vec<String>
    where
        P: AsRef<str>,
    {
        if limit == 0 {
            return Vec::new();
        }

        let (start, mut buffer) = match self.locate_lowercase(prefix.as_ref()) {
            Some(found) => found,
            None => return Vec::new(),
        };

        let mut out = Vec::with_capacity(limit.min(64));
        collect_words(start, &mut buffer, limit, &mut out);
        out
    }

    /// Returns up to `limit` completions of `prefix` ranked by frequency.
    ///
    /// Ties are broken by ascending word order. Every word below the prefix
    /// is visited before truncation since a late word may outrank an early
    /// one.
    pub fn autocomplete_ranked<P>(&self, prefix: P, limit: usize) -> Vec<Suggestion>
    where
        P: AsRef<str>,
    {
        if limit == 0 {
            return Vec::new();
        }

        let (start, mut buffer) = match self.locate_lowercase(prefix.as_ref()) {
            Some(found) => found,
            None => return Vec::new(),
        };

        let mut out = Vec::new();
        collect_suggestions(start, &mut buffer, &mut out);
        out.sort_by(Suggestion::rank);
        out.truncate(limit);
        out
    }

    /// Walks to `prefix` and returns the node with the normalized prefix.
    fn locate_lowercase(&self, prefix: &str) -> Option<(&TrieNode, String)> {
        let node = self.locate(prefix)?;
        // The walk succeeded, so every char maps to a letter
        let normalized = prefix
            .chars()
            .filter_map(index_of)
            .map(letter)
            .collect();
        Some((node, normalized))
    }
}

/// Visits `start` and every node below it in alphabetical pre-order.
///
/// `buffer` holds the path to the visited node and is passed to `visit`
/// together with the node. Traversal ends early once `visit` returns
/// `false`. The pending path lives on the heap, so depth is bounded only by
/// memory.
fn walk<'a, F>(start: &'a TrieNode, buffer: &mut String, mut visit: F)
where
    F: FnMut(&str, &'a TrieNode) -> bool,
{
    if !visit(buffer.as_str(), start) {
        return;
    }

    // Each frame is a node and the next child slot to try
    let mut stack: Vec<(&'a TrieNode, usize)> = vec![(start, 0)];
    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        match node.next_child(next) {
            Some((index, child)) => {
                frame.1 = index + 1;
                buffer.push(letter(index));
                if !visit(buffer.as_str(), child) {
                    return;
                }
                stack.push((child, 0));
            }
            None => {
                stack.pop();
                if !stack.is_empty() {
                    buffer.pop();
                }
            }
        }
    }
}

fn collect_words(start: &TrieNode, buffer: &mut String, limit: usize, out: &mut Vec<String>) {
    walk(start, buffer, |word, node| {
        if node.is_end {
            out.push(word.to_string());
        }
        out.len() < limit
    });
}

fn collect_suggestions(start: &TrieNode, buffer: &mut String, out: &mut Vec<Suggestion>) {
    walk(start, buffer, |word, node| {
        if node.is_end {
            out.push(Suggestion::new(word, node.frequency));
        }
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> NiihauTrie {
        let mut trie = NiihauTrie::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    #[test]
    fn test_autocomplete_alphabetical_order() {
        let trie = trie_of(&["apt", "bat", "apple", "app", "apply"]);

        assert_eq!(
            trie.autocomplete("ap", 10),
            vec!["app", "apple", "apply", "apt"]
        );
        assert_eq!(trie.autocomplete("b", 10), vec!["bat"]);
    }

    #[test]
    fn test_autocomplete_stops_at_limit() {
        let trie = trie_of(&["apt", "apple", "app", "apply"]);

        assert_eq!(trie.autocomplete("ap", 2), vec!["app", "apple"]);
        assert_eq!(trie.autocomplete("ap", 1), vec!["app"]);
        assert!(trie.autocomplete("ap", 0).is_empty());
    }

    #[test]
    fn test_autocomplete_prefix_is_a_word() {
        let trie = trie_of(&["app", "apple"]);

        assert_eq!(trie.autocomplete("app", 5), vec!["app", "apple"]);
        assert_eq!(trie.autocomplete("apple", 5), vec!["apple"]);
    }

    #[test]
    fn test_autocomplete_normalizes_prefix() {
        let trie = trie_of(&["apple", "app"]);

        assert_eq!(trie.autocomplete("APP", 5), vec!["app", "apple"]);
    }

    #[test]
    fn test_autocomplete_missing_or_invalid_prefix() {
        let trie = trie_of(&["apple"]);

        assert!(trie.autocomplete("b", 5).is_empty());
        assert!(trie.autocomplete("ap!", 5).is_empty());
        assert!(trie.autocomplete("applesauce", 5).is_empty());
    }

    #[test]
    fn test_autocomplete_empty_prefix_lists_everything() {
        let trie = trie_of(&["b", "a", "c"]);

        assert_eq!(trie.autocomplete("", 10), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ranked_orders_by_frequency() {
        let trie = trie_of(&["the", "then", "the", "the"]);

        assert_eq!(
            trie.autocomplete_ranked("th", 10),
            vec![Suggestion::new("the", 3), Suggestion::new("then", 1)]
        );
    }

    #[test]
    fn test_ranked_breaks_ties_by_word() {
        let trie = trie_of(&["there", "these", "them", "these", "there", "this"]);

        assert_eq!(
            trie.autocomplete_ranked("th", 10),
            vec![
                Suggestion::new("there", 2),
                Suggestion::new("these", 2),
                Suggestion::new("them", 1),
                Suggestion::new("this", 1),
            ]
        );
    }

    #[test]
    fn test_ranked_truncates_after_sorting() {
        // "zap" is visited first but "zebra" outranks it
        let trie = trie_of(&["zap", "zebra", "zebra", "zinc"]);

        assert_eq!(
            trie.autocomplete_ranked("z", 1),
            vec![Suggestion::new("zebra", 2)]
        );
        assert!(trie.autocomplete_ranked("z", 0).is_empty());
    }

    #[test]
    fn test_ranked_includes_unbumped_words() {
        let mut trie = trie_of(&["then"]);
        trie.insert_with("thee", false);

        assert_eq!(
            trie.autocomplete_ranked("th", 10),
            vec![Suggestion::new("then", 1), Suggestion::new("thee", 0)]
        );
    }

    #[test]
    fn test_walk_restores_path_between_siblings() {
        let trie = trie_of(&["abc", "abd", "ae", "b"]);

        assert_eq!(trie.autocomplete("", 10), vec!["abc", "abd", "ae", "b"]);
        assert_eq!(trie.autocomplete("a", 2), vec!["abc", "abd"]);
    }

    #[test]
    fn test_suggestion_serializes() {
        let json = serde_json::to_string(&Suggestion::new("the", 3)).unwrap();
        assert_eq!(json, r#"{"word":"the","frequency":3}"#);
    }
}
