//! Query execution and reporting.
//!
//! A [`Query`] is one operation against a loaded trie. Executing it yields a
//! [`QueryReport`], which renders either as console text (`Display`) or as
//! JSON (`Serialize`).

use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::debug;

use crate::data_structures::{NiihauTrie, Suggestion};

/// An operation to run against a trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Exact membership for each word
    Search(Vec<String>),

    /// Prefix existence for each prefix
    StartsWith(Vec<String>),

    /// Number of words starting with each prefix
    PrefixCount(Vec<String>),

    /// Alphabetical completion
    Complete {
        /// Prefix to complete
        prefix: String,
        /// Maximum number of words
        limit: usize,
    },

    /// Frequency-ranked completion
    Ranked {
        /// Prefix to complete
        prefix: String,
        /// Maximum number of suggestions
        limit: usize,
    },
}

/// Membership answer for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    /// The queried word or prefix, as given
    pub input: String,

    /// Whether it was found
    pub found: bool,
}

/// Prefix count answer for one prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixTally {
    /// The queried prefix, as given
    pub prefix: String,

    /// Number of words starting with it
    pub count: usize,
}

/// Result of executing a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryReport {
    /// Answers for [`Query::Search`]
    Search {
        /// One answer per word
        results: Vec<Membership>,
    },

    /// Answers for [`Query::StartsWith`]
    StartsWith {
        /// One answer per prefix
        results: Vec<Membership>,
    },

    /// Answers for [`Query::PrefixCount`]
    PrefixCount {
        /// One answer per prefix
        results: Vec<PrefixTally>,
    },

    /// Answer for [`Query::Complete`]
    Complete {
        /// Prefix that was completed
        prefix: String,
        /// Limit that was applied
        limit: usize,
        /// Completions in alphabetical order
        words: Vec<String>,
    },

    /// Answer for [`Query::Ranked`]
    Ranked {
        /// Prefix that was completed
        prefix: String,
        /// Limit that was applied
        limit: usize,
        /// Completions by descending frequency
        suggestions: Vec<Suggestion>,
    },
}

impl Query {
    /// Runs the query against `trie`.
    pub fn execute(&self, trie: &NiihauTrie) -> QueryReport {
        debug!(query = ?self, "Executing query");

        match self {
            Query::Search(words) => QueryReport::Search {
                results: memberships(words, |w| trie.search(w)),
            },
            Query::StartsWith(prefixes) => QueryReport::StartsWith {
                results: memberships(prefixes, |p| trie.starts_with(p)),
            },
            Query::PrefixCount(prefixes) => QueryReport::PrefixCount {
                results: prefixes
                    .iter()
                    .map(|prefix| PrefixTally {
                        prefix: prefix.clone(),
                        count: trie.prefix_count(prefix),
                    })
                    .collect(),
            },
            Query::Complete { prefix, limit } => QueryReport::Complete {
                prefix: prefix.clone(),
                limit: *limit,
                words: trie.autocomplete(prefix, *limit),
            },
            Query::Ranked { prefix, limit } => QueryReport::Ranked {
                prefix: prefix.clone(),
                limit: *limit,
                suggestions: trie.autocomplete_ranked(prefix, *limit),
            },
        }
    }
}

fn memberships<F>(inputs: &[String], found: F) -> Vec<Membership>
where
    F: Fn(&str) -> bool,
{
    inputs
        .iter()
        .map(|input| Membership {
            input: input.clone(),
            found: found(input),
        })
        .collect()
}

impl Display for QueryReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryReport::Search { results } => {
                for m in results {
                    writeln!(f, "search(\"{}\") = {}", m.input, m.found)?;
                }
            }
            QueryReport::StartsWith { results } => {
                for m in results {
                    writeln!(f, "startsWith(\"{}\") = {}", m.input, m.found)?;
                }
            }
            QueryReport::PrefixCount { results } => {
                for t in results {
                    writeln!(f, "prefixCount(\"{}\") = {}", t.prefix, t.count)?;
                }
            }
            QueryReport::Complete {
                prefix,
                limit,
                words,
            } => {
                writeln!(f, "Autocomplete(\"{prefix}\") [limit={limit}]")?;
                for word in words {
                    writeln!(f, "{word}")?;
                }
            }
            QueryReport::Ranked {
                prefix,
                limit,
                suggestions,
            } => {
                writeln!(f, "Ranked Autocomplete(\"{prefix}\") [limit={limit}]")?;
                for s in suggestions {
                    writeln!(f, "{}\t(freq={})", s.word, s.frequency)?;
                }
            }
        }
        Ok(())
    }
}
