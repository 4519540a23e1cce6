//! Error module for Lexitrie.
//!
//! The trie itself never fails; these types cover the surrounding crate:
//! loading configuration, reading word lists and writing generated files.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

pub mod config;

/// Result type alias used throughout Lexitrie.
pub type LexitrieResult<T> = Result<T, LexitrieError>;

/// Core error enum for Lexitrie.
#[derive(Error, Debug)]
pub enum LexitrieError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A word list could not be read.
    #[error("Failed to read word list {path:?}: {source}")]
    WordList {
        /// Path of the word list
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: LexitrieError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: LexitrieError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Logs the error through `tracing`.
    pub fn report(&self) {
        tracing::error!(
            error = %self.error,
            component = %self.component,
            details = self.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}
