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

//! Span-addressed parser combinators.
//!
//! Grammars are built by composing [`Pattern`]s: small pure functions that
//! try to match at the start of a [`SourceView`] and, on success, return a
//! concrete syntax [`Tree`] whose every node records the exact slice of
//! source text it covers.
//!
//! # Overview
//!
//! - [`combinators`]: primitives (literals, character classes, regexes),
//!   sequencing, ordered choice, repetition, lookahead, associativity
//!   helpers and result transformers
//! - [`name`] / [`hidden`]: the only way a node receives a rule name
//! - [`Grammar`]: mutually recursive rules, resolved in two phases
//! - [`Tree::project_to_named`]: reduce a raw tree to the nodes a grammar
//!   author named
//! - [`traverse`](mod@traverse): visitor-based walks over trees
//! - [`parse`] / [`parse_with_options`]: whole-input entry points with
//!   [`Limits`]
//!
//! # Example
//!
//! ```
//! use strand_core::combinators::{char_range_repeat1, separated_by1};
//! use strand_core::{name, parse_with_options, ParseOptions};
//!
//! let number = name("number", char_range_repeat1('0', '9').unwrap());
//! let list = name("list", separated_by1(number, ","));
//!
//! let opts = ParseOptions::builder().project(true).build();
//! let out = parse_with_options(&list, "1,22,333", &opts).unwrap();
//!
//! let numbers: Vec<&str> = out.tree.children().iter().map(|t| t.text()).collect();
//! assert_eq!(numbers, ["1", "22", "333"]);
//! ```
//!
//! # Failure model
//!
//! A pattern that does not apply returns `None` and consumes nothing; the
//! caller keeps its own view and may try something else. Errors exist only
//! at the edges: [`GrammarError`] while building patterns and grammars,
//! [`ParseError`] from the parse entry points.

pub mod combinators;
mod error;
mod grammar;
mod id;
mod limits;
mod parser;
mod pattern;
pub mod traverse;
mod tree;
pub mod view;

pub use error::{GrammarError, GrammarResult, ParseError, ParseResult};
pub use grammar::{rec, rule, Grammar, GrammarBuilder, RuleDef, Rules};
pub use id::{IdAllocator, NodeId};
pub use limits::Limits;
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder, ParseOutput};
pub use pattern::{hidden, name, name_with, Match, MatchResult, Pattern, PatternLike};
pub use traverse::{traverse, TreeStats, TreeVisitor, VisitContext};
pub use tree::{Meta, MetaValue, PostOrder, Tree};
pub use view::{SourceView, ViewError, ViewResult};
