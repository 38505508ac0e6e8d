//! Dictionary source configuration module.
//!
//! Where word lists and frequency corpora are read from, and whether a
//! missing source is fatal.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Word list used by search, prefix and alphabetical completion queries
    pub words_path: PathBuf,

    /// Frequency corpus (one line per occurrence) used by ranked completion
    pub frequency_path: PathBuf,

    /// Optional usage log replayed on top of the frequency corpus
    pub usage_path: Option<PathBuf>,

    /// Abort when a source cannot be opened instead of continuing empty
    pub required: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from("data/words.txt"),
            frequency_path: PathBuf::from("data/frequency.txt"),
            usage_path: None,
            required: false,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.words_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "words_path cannot be empty".to_string(),
            ));
        }

        if self.frequency_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "frequency_path cannot be empty".to_string(),
            ));
        }

        if matches!(&self.usage_path, Some(path) if path.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(
                "usage_path cannot be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}
