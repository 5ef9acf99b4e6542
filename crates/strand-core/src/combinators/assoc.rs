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

//! Left/right recursion elimination and binary operator chains.
//!
//! A recursive-descent pattern cannot call itself in its own first position
//! without recursing forever. The combinators here express the recursive
//! rules as loops and rebuild the nested tree shape the recursion would have
//! produced:
//!
//! | combinator | rule | tree for `x x x` |
//! |---|---|---|
//! | [`assoc_left`] | `A ::= A item \| extra` | `((e i) i)` |
//! | [`assoc_right`] | `A ::= item A \| extra` | `(i (i e))` |
//! | [`assoc_bin_left`] | `A ::= A mid item \| item` | `((i m i) m i)` |
//!
//! Precedence falls out of grammar nesting: each level's rule passes the
//! next-tighter level as `item` and its own operators as `mid`. When no
//! iteration runs, the single inner match is returned as is.

use crate::id::IdAllocator;
use crate::pattern::{to_pattern, Match, MatchResult, Pattern, PatternLike};
use crate::tree::Tree;
use crate::view::SourceView;
use std::sync::Arc;

/// `A ::= A item | extra`: one `extra` followed by any number of `item`s,
/// nested to the left.
pub fn assoc_left(item: impl Into<PatternLike>, extra: impl Into<PatternLike>) -> Pattern {
    let item = to_pattern(item);
    let extra = to_pattern(extra);
    Pattern::new(move |ids, input| {
        let first = extra.apply(ids, input)?;
        let mut tree = first.tree;
        let mut rest = first.rest;
        while let Some(m) = item.apply(ids, rest) {
            if m.consumed == 0 {
                break;
            }
            rest = m.rest;
            tree = Tree::node(ids, input.consumed_until(&rest), vec![tree, m.tree]);
        }
        Some(Match::spanning(input, tree, rest))
    })
}

/// `A ::= item A | extra`: any number of `item`s followed by one `extra`,
/// nested to the right.
pub fn assoc_right(item: impl Into<PatternLike>, extra: impl Into<PatternLike>) -> Pattern {
    let item = to_pattern(item);
    let extra = to_pattern(extra);
    Pattern::new(move |ids, input| {
        let mut items = Vec::new();
        let mut rest = input;
        while let Some(m) = item.apply(ids, rest) {
            if m.consumed == 0 {
                break;
            }
            rest = m.rest;
            items.push(m.tree);
        }
        let last = extra.apply(ids, rest)?;
        let rest = last.rest;
        let tree = items.into_iter().rev().fold(last.tree, |inner, head| {
            let span = head.span().cover(&inner.span());
            Tree::node(ids, span, vec![head, inner])
        });
        Some(Match::spanning(input, tree, rest))
    })
}

/// `item (mid item)*` folded into a left-associative binary tree.
///
/// Every iteration produces a node `(accumulated, mid, item)`.
///
/// # Examples
///
/// ```
/// use strand_core::combinators::{assoc_bin_left, char_range};
///
/// let digit = char_range('0', '9').unwrap();
/// let sum = assoc_bin_left(digit, "+");
/// let m = sum.apply_str("1+2+3").unwrap();
///
/// let root = &m.tree;
/// assert_eq!(root.children().len(), 3);
/// assert_eq!(root.children()[0].text(), "1+2");
/// assert_eq!(root.children()[2].text(), "3");
/// ```
pub fn assoc_bin_left(item: impl Into<PatternLike>, mid: impl Into<PatternLike>) -> Pattern {
    let item = to_pattern(item);
    let mid = to_pattern(mid);
    Pattern::new(move |ids, input| {
        bin_left_chain(ids, input, &item, |ids, rest| {
            mid.apply(ids, rest).map(|m| (m, None))
        })
    })
}

/// Like [`assoc_bin_left`], with a choice of operators where each binary
/// node is named after the operator that matched.
///
/// `ops` are tried in order at every position.
pub fn assoc_bin_left_map<P, N>(
    item: impl Into<PatternLike>,
    ops: impl IntoIterator<Item = (P, N)>,
) -> Pattern
where
    P: Into<PatternLike>,
    N: Into<Arc<str>>,
{
    let item = to_pattern(item);
    let ops: Vec<(Pattern, Arc<str>)> = ops
        .into_iter()
        .map(|(op, name)| (to_pattern(op), name.into()))
        .collect();
    Pattern::new(move |ids, input| {
        bin_left_chain(ids, input, &item, |ids, rest| {
            ops.iter()
                .find_map(|(op, name)| op.apply(ids, rest).map(|m| (m, Some(Arc::clone(name)))))
        })
    })
}

fn bin_left_chain<'s, F>(
    ids: &IdAllocator,
    input: SourceView<'s>,
    item: &Pattern,
    mid: F,
) -> MatchResult<'s>
where
    F: Fn(&IdAllocator, SourceView<'s>) -> Option<(Match<'s>, Option<Arc<str>>)>,
{
    let first = item.apply(ids, input)?;
    let mut tree = first.tree;
    let mut rest = first.rest;
    loop {
        let Some((op, name)) = mid(ids, rest) else {
            break;
        };
        let Some(rhs) = item.apply(ids, op.rest) else {
            break;
        };
        if op.consumed + rhs.consumed == 0 {
            break;
        }
        rest = rhs.rest;
        tree = Tree::node(ids, input.consumed_until(&rest), vec![tree, op.tree, rhs.tree]);
        if let Some(name) = name {
            tree.stamp(name, false);
        }
    }
    Some(Match::spanning(input, tree, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{char, char_one_of, char_range};

    fn digit() -> Pattern {
        char_range('0', '9').unwrap()
    }

    /// Renders a tree as nested parentheses over leaf text.
    fn shape(tree: &Tree<'_>) -> String {
        if tree.is_leaf() {
            return tree.text().to_string();
        }
        let inner: Vec<String> = tree.children().iter().map(shape).collect();
        format!("({})", inner.join(" "))
    }

    // ==================== assoc_left tests ====================

    #[test]
    fn test_assoc_left_nests_left() {
        let p = assoc_left(char('+'), digit());
        let m = p.apply_str("1+++").unwrap();
        assert_eq!(m.consumed, 4);
        assert_eq!(shape(&m.tree), "(((1 +) +) +)");
    }

    #[test]
    fn test_assoc_left_spans_grow_from_start() {
        let m = assoc_left(char('+'), digit()).apply_str("1++").unwrap();
        assert_eq!(m.tree.text(), "1++");
        assert_eq!(m.tree.children()[0].text(), "1+");
    }

    #[test]
    fn test_assoc_left_no_iterations_returns_extra() {
        let m = assoc_left(char('+'), digit()).apply_str("7x").unwrap();
        assert!(m.tree.is_leaf());
        assert_eq!(m.tree.text(), "7");
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn test_assoc_left_requires_extra() {
        assert!(assoc_left(char('+'), digit()).apply_str("+1").is_none());
    }

    // ==================== assoc_right tests ====================

    #[test]
    fn test_assoc_right_nests_right() {
        let p = assoc_right(char('-'), digit());
        let m = p.apply_str("--1").unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(shape(&m.tree), "(- (- 1))");
    }

    #[test]
    fn test_assoc_right_inner_spans() {
        let m = assoc_right(char('-'), digit()).apply_str("--1").unwrap();
        assert_eq!(m.tree.text(), "--1");
        assert_eq!(m.tree.children()[1].text(), "-1");
    }

    #[test]
    fn test_assoc_right_no_items() {
        let m = assoc_right(char('-'), digit()).apply_str("5").unwrap();
        assert!(m.tree.is_leaf());
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn test_assoc_right_requires_extra() {
        assert!(assoc_right(char('-'), digit()).apply_str("--").is_none());
    }

    // ==================== assoc_bin_left tests ====================

    #[test]
    fn test_assoc_bin_left_shape() {
        let m = assoc_bin_left(digit(), "+").apply_str("1+2+3").unwrap();
        assert_eq!(shape(&m.tree), "((1 + 2) + 3)");
        assert_eq!(m.tree.children().len(), 3);
        assert_eq!(m.tree.children()[0].text(), "1+2");
    }

    #[test]
    fn test_assoc_bin_left_single_item_unwrapped() {
        let m = assoc_bin_left(digit(), "+").apply_str("4").unwrap();
        assert!(m.tree.is_leaf());
        assert_eq!(m.tree.text(), "4");
    }

    #[test]
    fn test_assoc_bin_left_dangling_operator() {
        let m = assoc_bin_left(digit(), "+").apply_str("1+2+").unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(m.rest.window(), "+");
    }

    #[test]
    fn test_assoc_bin_left_map_names_nodes() {
        let p = assoc_bin_left_map(digit(), [("+", "add"), ("-", "sub")]);
        let m = p.apply_str("1-2+3").unwrap();
        assert_eq!(m.tree.name(), Some("add"));
        assert_eq!(m.tree.children()[0].name(), Some("sub"));
        assert_eq!(m.tree.children()[0].text(), "1-2");
    }

    #[test]
    fn test_assoc_bin_left_map_tries_ops_in_order() {
        let p = assoc_bin_left_map(digit(), [("*", "mul"), ("**", "pow")]);
        // "*" wins, then "*2" is not an item
        let m = p.apply_str("1**2").unwrap();
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn test_assoc_bin_left_map_with_char_class() {
        let p = assoc_bin_left_map(digit(), [(char_one_of("*/"), "op")]);
        let m = p.apply_str("8/4*2").unwrap();
        assert_eq!(shape(&m.tree), "((8 / 4) * 2)");
    }
}
