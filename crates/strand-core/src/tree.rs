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

//! Concrete syntax trees and named projection.
//!
//! Every successful match produces a [`Tree`]. Leaves wrap the span a
//! primitive consumed; composite nodes wrap the union span of their children.
//! Combinators leave nodes unnamed, and a naming wrapper stamps the nodes a
//! grammar author cares about. [`Tree::project_to_named`] then reduces the
//! raw tree to the named, visible nodes only.
//!
//! Trees are immutable once returned from a pattern. The `with_*` builders
//! copy and replace instead of editing shared structure.
//!
//! Operator chains nest one level per operator, so a tree can be as deep as
//! its input is long. Projection, cloning, comparison and dropping walk the
//! tree with an explicit stack and never recurse.

use crate::id::{IdAllocator, NodeId};
use crate::view::SourceView;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Metadata attached to a tree node.
pub type Meta = BTreeMap<String, MetaValue>;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum MetaValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl MetaValue {
    /// Returns the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the text value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A parse tree node.
///
/// A node with no children is a leaf. A node that is unnamed or hidden is
/// structural and disappears under [`project_to_named`](Tree::project_to_named).
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tree<'s> {
    id: NodeId,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    name: Option<Arc<str>>,
    hidden: bool,
    span: SourceView<'s>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    children: Vec<Tree<'s>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    meta: Option<Meta>,
}

impl<'s> Tree<'s> {
    /// Creates an unnamed leaf over `span`.
    pub fn leaf(ids: &IdAllocator, span: SourceView<'s>) -> Self {
        Self::node(ids, span, Vec::new())
    }

    /// Creates an unnamed composite node over `span`.
    pub fn node(ids: &IdAllocator, span: SourceView<'s>, children: Vec<Tree<'s>>) -> Self {
        Self {
            id: ids.allocate(),
            name: None,
            hidden: false,
            span,
            children,
            meta: None,
        }
    }

    /// The session-unique node id.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The rule name stamped on this node, if any.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if the node was explicitly hidden.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns `true` if the node survives named projection.
    #[inline]
    pub fn is_named(&self) -> bool {
        self.name.is_some() && !self.hidden
    }

    /// The span of source text this node covers.
    #[inline]
    pub fn span(&self) -> SourceView<'s> {
        self.span
    }

    /// The text this node covers.
    #[inline]
    pub fn text(&self) -> &'s str {
        self.span.window()
    }

    /// Length of the covered text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Returns `true` if the node covers no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Ordered children.
    #[inline]
    pub fn children(&self) -> &[Tree<'s>] {
        &self.children
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The metadata map, if any value was attached.
    #[inline]
    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Looks up a single metadata value.
    pub fn meta_value(&self, key: &str) -> Option<&MetaValue> {
        self.meta.as_ref()?.get(key)
    }

    /// Attaches a metadata value to a freshly produced node.
    pub fn insert_meta(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        self.meta
            .get_or_insert_with(Meta::new)
            .insert(key.into(), value.into());
    }

    /// Consumes the node, returning its children.
    pub fn into_children(mut self) -> Vec<Tree<'s>> {
        std::mem::take(&mut self.children)
    }

    /// Returns a copy with a different span.
    pub fn with_span(mut self, span: SourceView<'s>) -> Self {
        self.span = span;
        self
    }

    /// Returns a copy with different children.
    pub fn with_children(mut self, children: Vec<Tree<'s>>) -> Self {
        self.children = children;
        self
    }

    /// Returns a copy carrying `name` and the given hidden flag.
    pub fn with_name(mut self, name: impl Into<Arc<str>>, hidden: bool) -> Self {
        self.name = Some(name.into());
        self.hidden = hidden;
        self
    }

    /// Finalizes the name of a node that has not left its producing pattern.
    pub(crate) fn stamp(&mut self, name: Arc<str>, hidden: bool) {
        self.name = Some(name);
        self.hidden = hidden;
    }

    /// Reduces the tree to its named, visible nodes.
    ///
    /// The root is always kept. Below it, a named and visible child is kept
    /// (and projected recursively); any other child is replaced in place by
    /// its own projected children, preserving left-to-right order.
    /// Projecting an already projected tree returns an equal tree.
    pub fn project_to_named(&self) -> Tree<'s> {
        self.rebuild(Tree::is_named)
    }

    /// Copies the tree, keeping the root and every node `keep` accepts.
    ///
    /// A rejected node is replaced by the nodes rebuilt from its children.
    fn rebuild(&self, keep: fn(&Tree<'s>) -> bool) -> Tree<'s> {
        let mut stack: Vec<RebuildFrame<'_, 's>> = Vec::new();
        let mut current = RebuildFrame::new(self, true);
        loop {
            let node = current.node;
            if let Some(child) = node.children.get(current.next) {
                current.next += 1;
                let parent = std::mem::replace(&mut current, RebuildFrame::new(child, keep(child)));
                stack.push(parent);
                continue;
            }
            let finished = current;
            match stack.pop() {
                Some(mut parent) => {
                    if finished.keep {
                        parent.out.push(finished.node.shallow_copy(finished.out));
                    } else {
                        parent.out.extend(finished.out);
                    }
                    current = parent;
                }
                None => return finished.node.shallow_copy(finished.out),
            }
        }
    }

    /// This node's own fields over new children.
    fn shallow_copy(&self, children: Vec<Tree<'s>>) -> Tree<'s> {
        Tree {
            id: self.id,
            name: self.name.clone(),
            hidden: self.hidden,
            span: self.span,
            children,
            meta: self.meta.clone(),
        }
    }

    fn same_node(&self, other: &Tree<'s>) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.hidden == other.hidden
            && self.span == other.span
            && self.meta == other.meta
            && self.children.len() == other.children.len()
    }

    /// Iterates the tree children-first, left to right, ending at the root.
    pub fn iter_post_order(&self) -> PostOrder<'_, 's> {
        PostOrder {
            stack: vec![(self, 0)],
        }
    }

    /// Total number of nodes, including this one.
    pub fn node_count(&self) -> usize {
        self.iter_post_order().count()
    }
}

/// A node being copied by [`Tree::rebuild`]: the next child to visit and
/// the nodes rebuilt from the children visited so far.
struct RebuildFrame<'t, 's> {
    node: &'t Tree<'s>,
    next: usize,
    keep: bool,
    out: Vec<Tree<'s>>,
}

impl<'t, 's> RebuildFrame<'t, 's> {
    fn new(node: &'t Tree<'s>, keep: bool) -> Self {
        Self {
            node,
            next: 0,
            keep,
            out: Vec::with_capacity(node.children.len()),
        }
    }
}

impl Clone for Tree<'_> {
    fn clone(&self) -> Self {
        self.rebuild(|_| true)
    }
}

impl PartialEq for Tree<'_> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if !a.same_node(b) {
                return false;
            }
            pending.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Drop for Tree<'_> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.children);
        }
    }
}

/// Post-order iterator returned by [`Tree::iter_post_order`].
#[derive(Debug)]
pub struct PostOrder<'t, 's> {
    stack: Vec<(&'t Tree<'s>, usize)>,
}

impl<'t, 's> Iterator for PostOrder<'t, 's> {
    type Item = &'t Tree<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let tree: &'t Tree<'s> = top.0;
            if let Some(child) = tree.children.get(top.1) {
                top.1 += 1;
                self.stack.push((child, 0));
            } else {
                self.stack.pop();
                return Some(tree);
            }
        }
    }
}
