// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix search.

use serde::{Deserialize, Serialize};

use super::node::Node;

/// How a query that diverges from the stored paths is answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// A character with no matching child ends the search with no results.
    #[default]
    Strict,

    /// Characters with no matching child are skipped. The subtree of the
    /// deepest node reached is enumerated with the full query as prefix, and
    /// an empty query yields nothing.
    Lenient,
}

impl Node {
    /// Returns every stored word that starts with `prefix`, `prefix` itself
    /// included when it was stored.
    ///
    /// A miss yields an empty vector. An empty `prefix` matches every word.
    ///
    /// # Example
    ///
    /// ```
    /// use lexitrie::Node;
    ///
    /// let trie: Node = ["a", "ab", "ac", "abc"].into_iter().collect();
    /// assert_eq!(trie.search("ab"), vec!["ab", "abc"]);
    /// assert!(trie.search("x").is_empty());
    /// ```
    pub fn search(&self, prefix: &str) -> Vec<String> {
        self.search_with(prefix, SearchMode::Strict)
    }

    /// Like [`Node::search`], answering prefix misses according to `mode`.
    pub fn search_with(&self, prefix: &str, mode: SearchMode) -> Vec<String> {
        match mode {
            SearchMode::Strict => self
                .find(prefix)
                .map(|node| node.all(prefix))
                .unwrap_or_default(),
            SearchMode::Lenient => {
                if prefix.is_empty() {
                    return Vec::new();
                }
                let node = prefix
                    .chars()
                    .fold(self, |node, c| node.child(c).unwrap_or(node));
                node.all(prefix)
            }
        }
    }
}
