// Dweve Strand - Span-Addressed Parser Combinators
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tree traversal with visitors.
//!
//! [`traverse`] walks a [`Tree`] depth first and calls
//! [`TreeVisitor::enter`] before a node's children and
//! [`TreeVisitor::leave`] after them. Renderers, evaluators and analyzers
//! implement only the hooks they need; the recursion lives here.
//!
//! # Example
//!
//! ```
//! use strand_core::combinators::{char_range, repeat1};
//! use strand_core::traverse::{traverse, TreeVisitor, VisitContext};
//! use strand_core::{name, Tree};
//!
//! struct Names(Vec<String>);
//!
//! impl<'s> TreeVisitor<'s> for Names {
//!     type Error = std::convert::Infallible;
//!
//!     fn enter(&mut self, tree: &Tree<'s>, ctx: &VisitContext<'_>) -> Result<(), Self::Error> {
//!         if tree.is_named() {
//!             self.0.push(ctx.path_string());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let digit = name("digit", char_range('0', '9').unwrap());
//! let number = name("number", repeat1(digit));
//! let m = number.apply_str("42").unwrap();
//!
//! let mut names = Names(Vec::new());
//! traverse(&m.tree, &mut names).unwrap();
//! assert_eq!(names.0, ["number", "number.digit", "number.digit"]);
//! ```

use crate::tree::Tree;

/// Position of the node being visited.
#[derive(Debug, Clone, Default)]
pub struct VisitContext<'a> {
    /// Nesting depth (0 = root).
    pub depth: usize,
    /// Names from the root down to and including the current node.
    /// Unnamed nodes contribute `_`.
    pub path: Vec<&'a str>,
}

impl<'a> VisitContext<'a> {
    fn root(tree: &'a Tree<'_>) -> Self {
        Self {
            depth: 0,
            path: vec![label(tree)],
        }
    }

    /// Context for a child of the current node.
    pub fn child(&self, tree: &'a Tree<'_>) -> Self {
        let mut path = self.path.clone();
        path.push(label(tree));
        Self {
            depth: self.depth + 1,
            path,
        }
    }

    /// Dotted path for diagnostics.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }
}

fn label<'a>(tree: &'a Tree<'_>) -> &'a str {
    tree.name().unwrap_or("_")
}

/// Hooks called while walking a tree.
///
/// Both hooks default to doing nothing. Returning an error stops the walk.
pub trait TreeVisitor<'s> {
    /// Error type returned by visitor methods.
    type Error;

    /// Called before the node's children are visited.
    fn enter(&mut self, _tree: &Tree<'s>, _ctx: &VisitContext<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the node's children were visited.
    fn leave(&mut self, _tree: &Tree<'s>, _ctx: &VisitContext<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walks `tree` depth first, left to right.
pub fn traverse<'s, V: TreeVisitor<'s>>(tree: &Tree<'s>, visitor: &mut V) -> Result<(), V::Error> {
    let ctx = VisitContext::root(tree);
    traverse_node(tree, visitor, &ctx)
}

fn traverse_node<'s, V: TreeVisitor<'s>>(
    tree: &Tree<'s>,
    visitor: &mut V,
    ctx: &VisitContext<'_>,
) -> Result<(), V::Error> {
    visitor.enter(tree, ctx)?;
    for child in tree.children() {
        traverse_node(child, visitor, &ctx.child(child))?;
    }
    visitor.leave(tree, ctx)
}

/// Counts nodes by kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    /// All nodes.
    pub nodes: usize,
    /// Nodes without children.
    pub leaves: usize,
    /// Nodes with a visible name.
    pub named: usize,
    /// Nodes with a hidden name.
    pub hidden: usize,
    /// Maximum depth reached.
    pub max_depth: usize,
}

impl TreeStats {
    /// Collects statistics for `tree`.
    pub fn collect(tree: &Tree<'_>) -> Self {
        let mut stats = Self::default();
        // the visitor is infallible
        let _ = traverse(tree, &mut stats);
        stats
    }
}

impl<'s> TreeVisitor<'s> for TreeStats {
    type Error = std::convert::Infallible;

    fn enter(&mut self, tree: &Tree<'s>, ctx: &VisitContext<'_>) -> Result<(), Self::Error> {
        self.nodes += 1;
        if tree.is_leaf() {
            self.leaves += 1;
        }
        if tree.is_named() {
            self.named += 1;
        }
        if tree.is_hidden() {
            self.hidden += 1;
        }
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{char_range, char_repeat0, seq};
    use crate::{hidden, name};

    fn sample() -> crate::Pattern {
        let digit = name("digit", char_range('0', '9').unwrap());
        let ws = hidden("ws", char_repeat0(' '));
        name("pair", seq([digit.clone(), ws, digit]))
    }

    #[test]
    fn test_stats() {
        let m = sample().apply_str("1 2").unwrap();
        let stats = TreeStats::collect(&m.tree);
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.leaves, 3);
        assert_eq!(stats.named, 3);
        assert_eq!(stats.hidden, 1);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn test_enter_leave_order() {
        struct Order(Vec<String>);

        impl<'s> TreeVisitor<'s> for Order {
            type Error = std::convert::Infallible;

            fn enter(&mut self, t: &Tree<'s>, _: &VisitContext<'_>) -> Result<(), Self::Error> {
                self.0.push(format!("+{}", t.name().unwrap_or("_")));
                Ok(())
            }

            fn leave(&mut self, t: &Tree<'s>, _: &VisitContext<'_>) -> Result<(), Self::Error> {
                self.0.push(format!("-{}", t.name().unwrap_or("_")));
                Ok(())
            }
        }

        let m = sample().apply_str("12").unwrap();
        let mut order = Order(Vec::new());
        traverse(&m.tree, &mut order).unwrap();
        assert_eq!(
            order.0,
            ["+pair", "+digit", "-digit", "+ws", "-ws", "+digit", "-digit", "-pair"]
        );
    }

    #[test]
    fn test_visitor_error_stops_walk() {
        struct StopAtWs(usize);

        impl<'s> TreeVisitor<'s> for StopAtWs {
            type Error = String;

            fn enter(&mut self, t: &Tree<'s>, ctx: &VisitContext<'_>) -> Result<(), Self::Error> {
                self.0 += 1;
                if t.name() == Some("ws") {
                    return Err(ctx.path_string());
                }
                Ok(())
            }
        }

        let m = sample().apply_str("1 2").unwrap();
        let mut visitor = StopAtWs(0);
        assert_eq!(traverse(&m.tree, &mut visitor), Err("pair.ws".to_string()));
        assert_eq!(visitor.0, 3);
    }

    #[test]
    fn test_unnamed_path_label() {
        let m = seq(["a", "b"]).apply_str("ab").unwrap();
        let ctx = VisitContext::root(&m.tree);
        assert_eq!(ctx.child(&m.tree.children()[0]).path_string(), "_._");
    }
}
