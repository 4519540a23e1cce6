//! Search configuration module.
//!
//! This module defines how the command line front end answers prefix queries.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use crate::trie::SearchMode;
use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How queries that leave the stored paths are answered
    pub mode: SearchMode,

    /// Maximum number of results to print (None for all)
    pub limit: Option<usize>,
}

impl SearchConfig {
    /// Truncates `results` to the configured limit.
    pub fn apply_limit(&self, mut results: Vec<String>) -> Vec<String> {
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }
        results
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.limit == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.limit".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}
