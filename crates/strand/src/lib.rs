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

//! # Strand - span-addressed parser combinators
//!
//! Strand builds recursive-descent parsers out of small composable
//! patterns. Every node of the resulting concrete syntax tree records the
//! exact slice of the source it covers, and naming a pattern is what makes
//! its nodes survive projection to an abstract view.
//!
//! ## Quick Start
//!
//! ```rust
//! use strand::combinators::{alt, char_one_of_repeat0, char_range_repeat1, repeat0, seq};
//! use strand::{hidden, name, parse_rule, rec, rule, PatternLike};
//!
//! // list ::= "[" (ws item ws)* "]" ; item ::= number | list
//! let grammar = rec([
//!     rule("number", |_| Ok(name("number", char_range_repeat1('0', '9')?))),
//!     rule("item", |r| Ok(alt([r.get("number")?, r.get("list")?]))),
//!     rule("list", |r| {
//!         let ws = hidden("ws", char_one_of_repeat0(" "));
//!         let item = seq([ws.clone(), r.get("item")?, ws]);
//!         let open: PatternLike = '['.into();
//!         Ok(name("list", seq([open, repeat0(item).into(), ']'.into()])))
//!     }),
//! ])
//! .unwrap();
//!
//! let out = parse_rule(&grammar, "list", "[1 [2 3] 4]").unwrap();
//! let projected = out.tree.project_to_named();
//! assert_eq!(projected.children().len(), 3);
//! assert_eq!(projected.children()[1].text(), "[2 3]");
//! ```
//!
//! ## Modules
//!
//! - [`combinators`]: the combinator library
//! - [`traverse`](mod@traverse): visitor-based tree walks
//! - [`view`]: source views
//!
//! ## Features
//!
//! - `serde`: `Serialize` for trees, views and metadata

pub use strand_core::{
    hidden, name, name_with, parse, parse_with_options, rec, rule, Grammar, GrammarBuilder,
    GrammarError, GrammarResult, IdAllocator, Limits, Match, MatchResult, Meta, MetaValue, NodeId,
    ParseError, ParseOptions, ParseOptionsBuilder, ParseOutput, ParseResult, Pattern, PatternLike,
    PostOrder, RuleDef, Rules, SourceView, Tree, TreeStats, TreeVisitor, ViewError, VisitContext,
};

pub use strand_core::{combinators, traverse, view};

mod error;
pub use error::{Error, Result};

/// Parse `input` with rule `rule` of `grammar` using default options.
///
/// Looking up the rule and parsing are reported through one error type.
pub fn parse_rule<'s>(grammar: &Grammar, rule: &str, input: &'s str) -> Result<ParseOutput<'s>> {
    parse_rule_with_options(grammar, rule, input, &ParseOptions::default())
}

/// Parse `input` with rule `rule` of `grammar` using custom options.
pub fn parse_rule_with_options<'s>(
    grammar: &Grammar,
    rule: &str,
    input: &'s str,
    options: &ParseOptions,
) -> Result<ParseOutput<'s>> {
    let pattern = grammar.get(rule)?;
    Ok(parse_with_options(&pattern, input, options)?)
}
