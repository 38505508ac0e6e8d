//! Dictionary loading.
//!
//! A dictionary is a newline-separated list of words. Each line is trimmed,
//! blank lines are skipped, and every other line is handed to the trie. The
//! same format serves word lists, frequency corpora (one line per
//! occurrence) and usage logs replayed on top of a corpus.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::data_structures::NiihauTrie;
pub use crate::error::dictionary::DictionaryError;
use crate::error::{report_error, ErrorContext};

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Counts gathered while loading a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Non-empty lines read, accepted or not
    pub lines: usize,

    /// Lines the trie accepted as words
    pub accepted: usize,
}

impl LoadReport {
    /// Lines the trie rejected.
    pub fn rejected(&self) -> usize {
        self.lines - self.accepted
    }
}

/// Loads every non-empty line of `reader` into `trie`.
///
/// Each line bumps the frequency of its word, so repeated lines rank higher.
///
/// # Returns
///
/// * `Ok(LoadReport)` - Counts for the lines read.
/// * `Err(DictionaryError::Read)` - A line could not be read. Lines before it
///   have already been inserted.
pub fn load_lines<R: BufRead>(trie: &mut NiihauTrie, reader: R) -> DictionaryResult<LoadReport> {
    let mut report = LoadReport::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Read {
            line: number + 1,
            source,
        })?;

        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        report.lines += 1;
        match trie.try_insert(word) {
            Ok(()) => report.accepted += 1,
            Err(err) => debug!(line = number + 1, %err, "Rejected dictionary word"),
        }
    }

    Ok(report)
}

/// Opens `path` and loads it with [`load_lines`].
///
/// # Returns
///
/// * `Ok(LoadReport)` - Counts for the lines read.
/// * `Err(DictionaryError::Unavailable)` - The file could not be opened.
/// * `Err(DictionaryError::Read)` - The file could not be read to the end.
pub fn load_file<P: AsRef<Path>>(trie: &mut NiihauTrie, path: P) -> DictionaryResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let report = load_lines(trie, BufReader::new(file))?;
    info!(
        path = %path.display(),
        lines = report.lines,
        accepted = report.accepted,
        rejected = report.rejected(),
        "Dictionary loaded"
    );

    Ok(report)
}

/// What the lines of a source represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A word list or frequency corpus
    Words,
    /// A usage log replayed on top of a corpus
    Usage,
}

/// A dictionary file to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl Source {
    /// A word list or frequency corpus at `path`.
    pub fn words<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            kind: SourceKind::Words,
        }
    }

    /// A usage log at `path`.
    pub fn usage<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            kind: SourceKind::Usage,
        }
    }
}

/// Load counts for one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub kind: SourceKind,
    #[serde(flatten)]
    pub load: LoadReport,
}

impl Display for SourceSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let unit = match self.kind {
            SourceKind::Words => "words",
            SourceKind::Usage => "usage events",
        };
        write!(f, "Loaded {} {} from {}", self.load.lines, unit, self.path.display())
    }
}

/// Loads `sources` in order into one trie.
///
/// A source that cannot be opened or read is reported through the global
/// error reporter and counted as empty, unless `required` is set.
///
/// # Returns
///
/// * `Ok((trie, summaries))` - The trie and one summary per source.
/// * `Err(DictionaryError)` - A required source failed to load.
pub fn load_sources(
    sources: &[Source],
    required: bool,
) -> DictionaryResult<(NiihauTrie, Vec<SourceSummary>)> {
    let mut trie = NiihauTrie::new();
    let mut summaries = Vec::with_capacity(sources.len());

    for source in sources {
        let load = match load_file(&mut trie, &source.path) {
            Ok(load) => load,
            Err(e) if required => return Err(e),
            Err(e) => {
                report_error(
                    ErrorContext::new(e, "dictionary")
                        .with_details("continuing without this source"),
                );
                LoadReport::default()
            }
        };
        summaries.push(SourceSummary {
            path: source.path.clone(),
            kind: source.kind,
            load,
        });
    }

    Ok((trie, summaries))
}
