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

//! Whole-input parse entry points.
//!
//! [`Pattern::apply`] answers "does this pattern match here?". The functions
//! in this module answer "does this pattern parse this document?": they open
//! a fresh id session, enforce [`Limits`], apply the pattern to the full
//! text and turn the outcome into a [`ParseResult`].

use crate::error::{ParseError, ParseResult};
use crate::id::IdAllocator;
use crate::limits::Limits;
use crate::pattern::Pattern;
use crate::tree::Tree;
use crate::view::SourceView;
use tracing::{trace, warn};

/// Parsing configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
    /// Fail with [`ParseError::Incomplete`] unless the whole input is consumed.
    pub require_full_match: bool,
    /// Reduce the result to named nodes with [`Tree::project_to_named`].
    pub project: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            require_full_match: true,
            project: false,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_core::ParseOptions;
    ///
    /// let opts = ParseOptions::builder()
    ///     .max_input_size(4096)
    ///     .require_full_match(false)
    ///     .project(true)
    ///     .build();
    /// assert_eq!(opts.limits.max_input_size, 4096);
    /// ```
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    require_full_match: bool,
    project: bool,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        let defaults = ParseOptions::default();
        Self {
            limits: defaults.limits,
            require_full_match: defaults.require_full_match,
            project: defaults.project,
        }
    }

    /// Set the maximum input size in bytes (default: 64MB).
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.limits.max_input_size = size;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Require the pattern to consume the whole input (default: true).
    pub fn require_full_match(mut self, required: bool) -> Self {
        self.require_full_match = required;
        self
    }

    /// Project the result to named nodes (default: false).
    pub fn project(mut self, project: bool) -> Self {
        self.project = project;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            require_full_match: self.require_full_match,
            project: self.project,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput<'s> {
    /// The produced tree, projected if requested.
    pub tree: Tree<'s>,
    /// Bytes consumed.
    pub consumed: usize,
    /// Unconsumed input; empty when a full match was required.
    pub rest: SourceView<'s>,
}

/// Parse `input` with default options.
pub fn parse<'s>(pattern: &Pattern, input: &'s str) -> ParseResult<ParseOutput<'s>> {
    parse_with_options(pattern, input, &ParseOptions::default())
}

/// Parse `input` with custom options.
pub fn parse_with_options<'s>(
    pattern: &Pattern,
    input: &'s str,
    options: &ParseOptions,
) -> ParseResult<ParseOutput<'s>> {
    let max = options.limits.max_input_size;
    if input.len() > max {
        warn!(size = input.len(), max, "input rejected by size limit");
        return Err(ParseError::InputTooLarge {
            size: input.len(),
            max,
        });
    }

    trace!(size = input.len(), "parse started");
    let ids = IdAllocator::new();
    let m = pattern
        .apply(&ids, SourceView::new(input))
        .ok_or(ParseError::NoMatch)?;

    if options.require_full_match && !m.rest.is_empty() {
        warn!(
            consumed = m.consumed,
            remaining = m.rest.len(),
            "parse did not consume the whole input"
        );
        return Err(ParseError::Incomplete {
            consumed: m.consumed,
            remaining: m.rest.len(),
        });
    }

    trace!(
        consumed = m.consumed,
        ids_allocated = ids.peek().get() - 1,
        "parse finished"
    );
    let tree = if options.project {
        m.tree.project_to_named()
    } else {
        m.tree
    };
    Ok(ParseOutput {
        tree,
        consumed: m.consumed,
        rest: m.rest,
    })
}
