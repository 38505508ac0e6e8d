//! Query defaults configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Defaults applied when a query omits its prefix or limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Prefix for alphabetical completion
    pub complete_prefix: String,

    /// Prefix for ranked completion
    pub ranked_prefix: String,

    /// Prefixes counted when `prefix-count` is given none
    pub count_prefixes: Vec<String>,

    /// Maximum number of completions returned
    pub default_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            complete_prefix: "ab".to_string(),
            ranked_prefix: "th".to_string(),
            count_prefixes: ["a", "ab", "alg", "aard", "z", "nope"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            default_limit: 20,
        }
    }
}

impl QueryConfig {
    /// Resolves a requested limit; missing or non-positive values fall back
    /// to `default_limit`.
    pub fn resolve_limit(&self, requested: Option<i64>) -> usize {
        match requested {
            Some(limit) if limit > 0 => usize::try_from(limit).unwrap_or(usize::MAX),
            _ => self.default_limit,
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        let named = [
            ("complete_prefix", &self.complete_prefix),
            ("ranked_prefix", &self.ranked_prefix),
        ];
        let counted = self.count_prefixes.iter().map(|p| ("count_prefixes", p));
        for (key, prefix) in named.into_iter().chain(counted) {
            if !prefix.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must only contain letters a-z, got '{prefix}'"
                )));
            }
        }

        if self.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "default_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
