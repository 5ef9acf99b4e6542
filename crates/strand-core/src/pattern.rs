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

//! The pattern contract every combinator implements.
//!
//! A [`Pattern`] is a pure function from a [`SourceView`] to a
//! [`MatchResult`]. On success it reports the produced [`Tree`], how many
//! bytes it consumed, and the remaining view; on failure it returns `None`
//! and consumes nothing. Because views are immutable, a caller that gets
//! `None` simply tries its next alternative against the view it still holds.
//!
//! Patterns are cheap to clone and can be shared across threads. Each
//! invocation receives the session's [`IdAllocator`] so that tree ids stay
//! unique per parse.

use crate::combinators::literal;
use crate::id::IdAllocator;
use crate::tree::Tree;
use crate::view::SourceView;
use std::fmt;
use std::sync::Arc;

/// Outcome of applying a pattern: `None` means "no match here".
pub type MatchResult<'s> = Option<Match<'s>>;

/// A successful match.
///
/// Invariants: `rest` is the input advanced by `consumed`, and
/// `tree.len() == consumed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'s> {
    /// The tree produced by the match.
    pub tree: Tree<'s>,
    /// Number of bytes consumed from the input.
    pub consumed: usize,
    /// The input left over after the match.
    pub rest: SourceView<'s>,
}

impl<'s> Match<'s> {
    /// A leaf match over the first `consumed` bytes of `input`.
    ///
    /// Returns `None` if `consumed` does not describe a valid prefix.
    pub fn leaf(ids: &IdAllocator, input: SourceView<'s>, consumed: usize) -> MatchResult<'s> {
        let span = input.take(consumed).ok()?;
        let rest = input.skip(consumed).ok()?;
        Some(Self {
            tree: Tree::leaf(ids, span),
            consumed,
            rest,
        })
    }

    /// A zero-width leaf at the start of `input`.
    pub fn epsilon(ids: &IdAllocator, input: SourceView<'s>) -> Self {
        Self {
            tree: Tree::leaf(ids, input.take_nothing()),
            consumed: 0,
            rest: input,
        }
    }

    /// Wraps a match in a fresh single-child node with the same span.
    pub fn wrap(ids: &IdAllocator, inner: Match<'s>) -> Self {
        let span = inner.tree.span();
        Self {
            tree: Tree::node(ids, span, vec![inner.tree]),
            consumed: inner.consumed,
            rest: inner.rest,
        }
    }

    /// A composite node over everything between `input` and `rest`.
    pub fn composite(
        ids: &IdAllocator,
        input: SourceView<'s>,
        children: Vec<Tree<'s>>,
        rest: SourceView<'s>,
    ) -> Self {
        Self::spanning(input, Tree::node(ids, input.consumed_until(&rest), children), rest)
    }

    /// Pairs an already built tree with the remainder it leaves behind.
    pub fn spanning(input: SourceView<'s>, tree: Tree<'s>, rest: SourceView<'s>) -> Self {
        Self {
            tree,
            consumed: rest.start() - input.start(),
            rest,
        }
    }

    /// Discards the bookkeeping and keeps the tree.
    pub fn into_tree(self) -> Tree<'s> {
        self.tree
    }
}

type PatternFn = dyn for<'s> Fn(&IdAllocator, SourceView<'s>) -> MatchResult<'s> + Send + Sync;

/// A composable matching function.
#[derive(Clone)]
pub struct Pattern {
    inner: Arc<PatternFn>,
}

impl Pattern {
    /// Wraps a matching function.
    ///
    /// The function must be pure: the same view always yields the same
    /// result, and a failure consumes nothing.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'s> Fn(&IdAllocator, SourceView<'s>) -> MatchResult<'s> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Applies the pattern to `input`.
    #[inline]
    pub fn apply<'s>(&self, ids: &IdAllocator, input: SourceView<'s>) -> MatchResult<'s> {
        (self.inner)(ids, input)
    }

    /// Applies the pattern to the whole of `text` in a fresh session.
    pub fn apply_str<'s>(&self, text: &'s str) -> MatchResult<'s> {
        self.apply(&IdAllocator::new(), SourceView::new(text))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern").finish_non_exhaustive()
    }
}

/// Either literal text or an already compiled pattern.
///
/// Combinators accept `impl Into<PatternLike>` so grammars can mix string
/// literals and patterns; the value is normalized once, when the combinator
/// is built.
#[derive(Debug, Clone)]
pub enum PatternLike {
    /// Matches exactly this text.
    Literal(String),
    /// Any pattern.
    Compiled(Pattern),
}

impl PatternLike {
    /// Normalizes to a pattern.
    pub fn into_pattern(self) -> Pattern {
        match self {
            Self::Literal(text) => literal(text),
            Self::Compiled(pattern) => pattern,
        }
    }
}

impl From<&str> for PatternLike {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for PatternLike {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<char> for PatternLike {
    fn from(c: char) -> Self {
        Self::Literal(c.to_string())
    }
}

impl From<Pattern> for PatternLike {
    fn from(pattern: Pattern) -> Self {
        Self::Compiled(pattern)
    }
}

impl From<&Pattern> for PatternLike {
    fn from(pattern: &Pattern) -> Self {
        Self::Compiled(pattern.clone())
    }
}

/// Normalizes anything pattern-like.
#[inline]
pub(crate) fn to_pattern(p: impl Into<PatternLike>) -> Pattern {
    p.into().into_pattern()
}

/// Names the tree produced by `pattern`.
///
/// This is the only place a node receives a name. On success the fresh tree
/// is stamped before it is returned.
pub fn name(rule: impl Into<Arc<str>>, pattern: impl Into<PatternLike>) -> Pattern {
    name_with(rule, pattern, false)
}

/// Names the tree produced by `pattern` and hides it from projection.
pub fn hidden(rule: impl Into<Arc<str>>, pattern: impl Into<PatternLike>) -> Pattern {
    name_with(rule, pattern, true)
}

/// Names the tree produced by `pattern` with an explicit hidden flag.
pub fn name_with(
    rule: impl Into<Arc<str>>,
    pattern: impl Into<PatternLike>,
    hidden: bool,
) -> Pattern {
    let rule = rule.into();
    let inner = to_pattern(pattern);
    Pattern::new(move |ids, input| {
        let mut m = inner.apply(ids, input)?;
        m.tree.stamp(Arc::clone(&rule), hidden);
        Some(m)
    })
}
