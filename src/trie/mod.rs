// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! In-memory prefix tree.
//!
//! This module provides a trie that stores strings character by character,
//! sharing common prefixes between words. It is meant as a building block for
//! autocomplete, spell-check candidate generation and dictionary lookups.
//!
//! # Features
//!
//! - Branches on Unicode scalar values, never on raw UTF-8 bytes
//! - Explicit terminal flag, so any character may appear in a word
//! - Deterministic output: enumeration and rendering visit children in
//!   ascending code point order
//! - Total API: misses are empty results, nothing returns an error
//!
//! # Example
//!
//! ```
//! use lexitrie::trie::{Node, SearchMode};
//!
//! let mut trie = Node::new();
//! trie.index(["a", "ab", "ac", "abc"]);
//!
//! assert_eq!(trie.search("ab"), vec!["ab", "abc"]);
//! assert_eq!(trie.all(""), vec!["a", "ab", "abc", "ac"]);
//! assert_eq!(trie.to_string(), "a\n b\n  c\n c\n");
//!
//! // Lenient mode keeps going past characters that have no branch
//! assert_eq!(trie.search_with("ax", SearchMode::Lenient), vec!["ax", "axb", "axbc", "axc"]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Insert and exact lookup: O(k log σ) where k is the word length in
//!   characters and σ the branching factor of a node
//! - Prefix search: lookup cost plus the size of the matched subtree
//! - Memory: one node per distinct prefix across all stored words
//!
//! The trie has no internal locking. Mutation needs `&mut`, while any number
//! of readers can share `&Node`.

mod enumerate;
mod node;
mod render;
mod search;

pub use enumerate::Words;
pub use node::Node;
pub use search::SearchMode;

/// A trie is addressed through its root node.
pub type Trie = Node;
