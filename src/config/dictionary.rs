//! Dictionary configuration module.
//!
//! This module defines which word lists are loaded into the trie and how
//! their lines are normalized before insertion.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Word list files, one word per line, loaded in order
    pub files: Vec<PathBuf>,

    /// Whether to lowercase every word before insertion
    pub lowercase: bool,
}

impl DictionaryConfig {
    /// Applies the configured normalization to a raw line.
    ///
    /// Returns `None` for lines that hold no word.
    pub fn normalize(&self, line: &str) -> Option<String> {
        let word = line.trim_end_matches(['\r', '\n']);
        if word.trim().is_empty() {
            return None;
        }
        if self.lowercase {
            Some(word.to_lowercase())
        } else {
            Some(word.to_string())
        }
    }

    /// Applies the case folding used for stored words to a lookup query.
    ///
    /// Unlike [`DictionaryConfig::normalize`], every query is kept, blank ones included.
    pub fn normalize_query<'a>(&self, query: &'a str) -> Cow<'a, str> {
        if self.lowercase {
            Cow::Owned(query.to_lowercase())
        } else {
            Cow::Borrowed(query)
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.files.iter().any(|path| path.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(
                "dictionary.files cannot contain an empty path".to_string(),
            ));
        }

        Ok(())
    }
}
