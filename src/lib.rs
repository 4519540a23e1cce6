//! Lexitrie Library
//!
//! This library contains an in-memory prefix tree together with the pieces
//! the `lexitrie` binary builds on: layered configuration, word list loading
//! and error types.
//!
//! # Architecture
//!
//! - [`trie`] holds the data structure. It performs no IO and never fails.
//! - [`dictionary`] fills a trie from word list files.
//! - [`config`] loads and validates settings from files and the environment.
//! - [`error`] defines the error types of everything outside the trie.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use trie::{Node, SearchMode, Trie, Words};
