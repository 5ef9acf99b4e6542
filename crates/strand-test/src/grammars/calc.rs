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

//! Integer arithmetic with `+ - * /` and parentheses.
//!
//! ```text
//! expr   ::= addsub
//! addsub ::= muldiv (("+" | "-") muldiv)*     left-assoc, nodes add/sub
//! muldiv ::= atom (("*" | "/") atom)*         left-assoc, nodes mul/div
//! atom   ::= ws (num | "(" expr ")") ws
//! num    ::= -?(0|[1-9][0-9]*)                meta "value"
//! ```
//!
//! Division truncates toward zero.

use strand_core::combinators::{
    alt, assoc_bin_left_map, enclosed_by, parenthesized, regex, space_tab_lf0, with_meta,
};
use strand_core::{name, rec, rule, Grammar, GrammarResult, MetaValue, Pattern, Tree};
use thiserror::Error;

/// Inputs [`pattern`] parses completely.
pub const SAMPLES: &[&str] = &[
    "1",
    "-7",
    "1+2*3-4/5",
    "1 + 2 * -3 - 4 / 5 * (-6 + 11)",
    "((((2))))",
    "(((((1)))))",
    " 10 / 3 ",
];

/// Builds the arithmetic grammar.
pub fn grammar() -> GrammarResult<Grammar> {
    rec([
        rule("expr", |r| Ok(alt([r.get("addsub")?]))),
        rule("addsub", |r| {
            Ok(assoc_bin_left_map(
                r.get("muldiv")?,
                [("+", "add"), ("-", "sub")],
            ))
        }),
        rule("muldiv", |r| {
            Ok(assoc_bin_left_map(
                r.get("atom")?,
                [("*", "mul"), ("/", "div")],
            ))
        }),
        rule("atom", |r| {
            Ok(enclosed_by(
                alt([r.get("num")?, parenthesized(r.get("expr")?)]),
                space_tab_lf0(),
            ))
        }),
        rule("num", |_| {
            let digits = regex(r"^-?(0|[1-9][0-9]*)")?;
            Ok(name(
                "num",
                with_meta(digits, "value", |text| text.parse().ok().map(MetaValue::Int)),
            ))
        }),
    ])
}

/// The `expr` entry rule.
pub fn pattern() -> GrammarResult<Pattern> {
    grammar()?.get("expr")
}

/// Failure to evaluate an arithmetic tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Right operand of `/` was zero.
    #[error("division by zero at byte {offset}")]
    DivisionByZero {
        /// Start of the division node.
        offset: usize,
    },

    /// An intermediate result left the `i64` range.
    #[error("arithmetic overflow at byte {offset}")]
    Overflow {
        /// Start of the overflowing node.
        offset: usize,
    },

    /// The tree does not have the shape the grammar produces.
    #[error("malformed tree: {0}")]
    Malformed(String),
}

/// Evaluates a tree produced by [`pattern`], raw or projected.
///
/// Walks the tree children-first with a value stack: every `num` pushes its
/// value, every operator node pops its two operands. Unnamed nodes carry no
/// value.
pub fn evaluate(tree: &Tree<'_>) -> Result<i64, EvalError> {
    let mut stack: Vec<i64> = Vec::new();
    for node in tree.iter_post_order() {
        let Some(op) = node.name() else {
            continue;
        };
        if op == "num" {
            let value = node
                .meta_value("value")
                .and_then(MetaValue::as_int)
                .ok_or_else(|| {
                    EvalError::Malformed(format!("num without value: {}", node.text()))
                })?;
            stack.push(value);
            continue;
        }

        let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
            return Err(EvalError::Malformed(format!("{} is missing an operand", op)));
        };
        let offset = node.span().start();
        let value = match op {
            "add" => lhs.checked_add(rhs),
            "sub" => lhs.checked_sub(rhs),
            "mul" => lhs.checked_mul(rhs),
            "div" if rhs == 0 => return Err(EvalError::DivisionByZero { offset }),
            "div" => lhs.checked_div(rhs),
            other => return Err(EvalError::Malformed(format!("unknown node {}", other))),
        };
        stack.push(value.ok_or(EvalError::Overflow { offset })?);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::Malformed(format!(
            "expected one result, found {}",
            stack.len()
        ))),
    }
}
