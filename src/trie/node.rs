// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix tree.
//!
//! A [`Node`] is the only building block of the trie: it owns a map of
//! characters to child nodes and a flag telling whether the path leading to
//! it spells a stored word. The root of a trie is just a `Node` like any other.

use std::collections::{btree_map, BTreeMap};
use std::fmt::{self, Debug, Formatter};
use std::mem;

use tracing::trace;

/// A node in the prefix tree.
///
/// Children are kept in a `BTreeMap`, so iterating over them always yields
/// characters in ascending code point order.
///
/// Every walk over the subtree, including `Clone`, `PartialEq` and `Drop`,
/// uses an explicit stack, so depth is bounded by memory and not by the
/// thread's stack.
#[derive(Default)]
pub struct Node {
    /// Map of characters to exclusively owned child nodes
    pub(crate) children: BTreeMap<char, Node>,

    /// Whether the path from the root to this node is a stored word
    pub(crate) terminal: bool,
}

impl Node {
    /// Creates a new empty node with no children that is not terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every word of `words`, in order.
    ///
    /// # Arguments
    ///
    /// * `words` - Any iterator of string-like items.
    ///
    /// # Example
    ///
    /// ```
    /// use lexitrie::Node;
    ///
    /// let mut trie = Node::new();
    /// trie.index(["ab", "ac", "ad", "abc"]);
    /// assert_eq!(trie.len(), 4);
    /// ```
    pub fn index<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for word in words {
            self.insert(word.as_ref());
            count += 1;
        }
        trace!(count, "indexed words");
    }

    /// Inserts `word`, creating a child for every character not yet present
    /// along its path, and marks the final node terminal.
    ///
    /// Traversal is per `char`, so multi-byte characters branch as a single
    /// unit. Inserting `""` marks the receiver itself terminal. Inserting the
    /// same word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        let mut node = self;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
    }

    /// Returns `true` if the path leading to this node is a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Iterates over the direct children in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &Node)> + '_ {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Calls `f` for each direct child in ascending character order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(char, &Node),
    {
        for (c, node) in &self.children {
            f(*c, node);
        }
    }

    /// Follows `prefix` exactly and returns the node it ends on.
    ///
    /// Returns `None` as soon as a character has no child. An empty prefix
    /// returns the receiver.
    pub fn find(&self, prefix: &str) -> Option<&Node> {
        prefix.chars().try_fold(self, |node, c| node.child(c))
    }

    /// Returns `true` if `word` itself was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(Node::is_terminal)
    }

    /// Returns `true` if no word, not even the empty one, is stored.
    pub fn is_empty(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }

    /// Counts the stored words in this subtree.
    ///
    /// This walks the whole subtree, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += usize::from(node.terminal);
            stack.extend(node.children.values());
        }
        count
    }
}

/// A node being copied, with the children built for it so far.
struct CloneFrame<'a> {
    key: char,
    source: &'a Node,
    remaining: btree_map::Iter<'a, char, Node>,
    built: BTreeMap<char, Node>,
}

impl<'a> CloneFrame<'a> {
    fn new(key: char, source: &'a Node) -> Self {
        Self {
            key,
            source,
            remaining: source.children.iter(),
            built: BTreeMap::new(),
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut root = BTreeMap::new();
        let mut root_remaining = self.children.iter();
        let mut frames: Vec<CloneFrame<'_>> = Vec::new();

        // A copy is attached to its parent once all of its children are built
        loop {
            let next = match frames.last_mut() {
                Some(top) => top.remaining.next(),
                None => root_remaining.next(),
            };
            if let Some((c, child)) = next {
                frames.push(CloneFrame::new(*c, child));
                continue;
            }
            let Some(done) = frames.pop() else {
                break;
            };
            let copy = Node {
                children: done.built,
                terminal: done.source.terminal,
            };
            match frames.last_mut() {
                Some(parent) => parent.built.insert(done.key, copy),
                None => root.insert(done.key, copy),
            };
        }

        Node {
            children: root,
            terminal: self.terminal,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.terminal != right.terminal || left.children.len() != right.children.len() {
                return false;
            }
            for ((lc, ln), (rc, rn)) in left.children.iter().zip(&right.children) {
                if lc != rc {
                    return false;
                }
                stack.push((ln, rn));
            }
        }
        true
    }
}

impl Eq for Node {}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .field("words", &self.len())
            .finish()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Node> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Node {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.index(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for Node {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut node = Node::new();
        node.index(iter);
        node
    }
}
