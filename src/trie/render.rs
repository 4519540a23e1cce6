// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-oriented debug rendering.

use std::fmt::{self, Display, Formatter, Write};

use super::node::Node;

impl Node {
    /// Renders the subtree with each character on its own line, preceded by
    /// `indent` spaces plus one more per level of depth.
    ///
    /// Terminal markers are not rendered and a node without children renders
    /// as an empty string.
    pub fn print(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, indent).ok();
        out
    }

    fn write_tree<W: Write>(&self, out: &mut W, indent: usize) -> fmt::Result {
        let mut stack = vec![self.children.iter()];
        while let Some(level) = stack.last_mut() {
            match level.next() {
                Some((c, child)) => {
                    let depth = indent + stack.len() - 1;
                    writeln!(out, "{:depth$}{c}", "")?;
                    stack.push(child.children.iter());
                }
                None => {
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
