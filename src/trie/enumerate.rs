// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Subtree enumeration.
//!
//! Both the eager [`Node::all`] and the lazy [`Words`] iterator walk the
//! subtree depth first: a node's own word comes before the words of its
//! children, and children are visited in ascending character order.

use std::collections::btree_map;

use super::node::Node;

impl Node {
    /// Returns every word stored in this subtree, each prefixed by `prefix`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The text to prepend to every path found below the receiver.
    ///
    /// # Example
    ///
    /// ```
    /// use lexitrie::Node;
    ///
    /// let trie: Node = ["ab", "ac", "ad", "abc", "abcd"].into_iter().collect();
    /// assert_eq!(trie.all(""), vec!["ab", "abc", "abcd", "ac", "ad"]);
    /// ```
    pub fn all(&self, prefix: &str) -> Vec<String> {
        Words::with_prefix(self, prefix).collect()
    }

    /// Returns a lazy iterator over the words of this subtree.
    ///
    /// Yields the same sequence as `all("")`.
    pub fn words(&self) -> Words<'_> {
        Words::with_prefix(self, "")
    }
}

/// Depth-first iterator over the words stored below a node.
///
/// Created by [`Node::words`]. The current path is shared between all
/// levels, so each step costs one push or pop plus a copy per word yielded.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    /// Node whose own word has not been considered yet
    start: Option<&'a Node>,

    /// One iterator per level of the current path
    stack: Vec<btree_map::Iter<'a, char, Node>>,

    /// Prefix followed by the characters of the current path
    path: String,
}

impl<'a> Words<'a> {
    fn with_prefix(node: &'a Node, prefix: &str) -> Self {
        Self {
            start: Some(node),
            stack: Vec::new(),
            path: String::from(prefix),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.stack.push(start.children.iter());
            if start.terminal {
                return Some(self.path.clone());
            }
        }

        while let Some(level) = self.stack.last_mut() {
            match level.next() {
                Some((c, child)) => {
                    self.path.push(*c);
                    self.stack.push(child.children.iter());
                    if child.terminal {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The start node's level adds no character to the path
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}
