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

//! Sequencing, choice, option and repetition.
//!
//! These combinators are written purely against the [`Pattern`] contract and
//! never look inside the patterns they compose.
//!
//! Choice is ordered (PEG semantics): the first alternative that matches
//! wins and later ones are never tried. Repetition is greedy and never gives
//! back input, so `seq([repeat0('a'), "a"])` cannot match `"aa"`.
//!
//! A repetition stops after the first iteration that consumes nothing. That
//! iteration still counts, so `repeat1(empty())` matches once and wrapping a
//! zero-width pattern in `repeat0` terminates.

use crate::pattern::{to_pattern, Match, Pattern, PatternLike};

fn collect(patterns: impl IntoIterator<Item = impl Into<PatternLike>>) -> Vec<Pattern> {
    patterns.into_iter().map(to_pattern).collect()
}

/// Applies each pattern in order; fails if any of them fails.
///
/// The resulting node has one child per pattern.
///
/// # Examples
///
/// ```
/// use strand_core::combinators::{seq, char_range};
///
/// let pair = seq([char_range('a', 'z').unwrap(), char_range('0', '9').unwrap()]);
/// let m = pair.apply_str("b7!").unwrap();
/// assert_eq!(m.consumed, 2);
/// assert_eq!(m.tree.children().len(), 2);
/// ```
pub fn seq(patterns: impl IntoIterator<Item = impl Into<PatternLike>>) -> Pattern {
    let patterns = collect(patterns);
    Pattern::new(move |ids, input| {
        let mut children = Vec::with_capacity(patterns.len());
        let mut rest = input;
        for pattern in &patterns {
            let m = pattern.apply(ids, rest)?;
            rest = m.rest;
            children.push(m.tree);
        }
        Some(Match::composite(ids, input, children, rest))
    })
}

/// Ordered choice: the first alternative that matches wins.
///
/// The winning tree is wrapped in a fresh single-child node, so naming the
/// choice never renames the alternative that matched.
pub fn alt(patterns: impl IntoIterator<Item = impl Into<PatternLike>>) -> Pattern {
    let patterns = collect(patterns);
    Pattern::new(move |ids, input| {
        let m = patterns.iter().find_map(|p| p.apply(ids, input))?;
        Some(Match::wrap(ids, m))
    })
}

/// Binary ordered choice.
pub fn either(first: impl Into<PatternLike>, second: impl Into<PatternLike>) -> Pattern {
    let first = to_pattern(first);
    let second = to_pattern(second);
    Pattern::new(move |ids, input| {
        let m = first
            .apply(ids, input)
            .or_else(|| second.apply(ids, input))?;
        Some(Match::wrap(ids, m))
    })
}

/// Always succeeds; yields a zero-width leaf when `pattern` does not match.
pub fn opt(pattern: impl Into<PatternLike>) -> Pattern {
    let pattern = to_pattern(pattern);
    Pattern::new(move |ids, input| {
        Some(match pattern.apply(ids, input) {
            Some(m) => Match::wrap(ids, m),
            None => Match::epsilon(ids, input),
        })
    })
}

fn repeat(pattern: Pattern, at_least_one: bool) -> Pattern {
    Pattern::new(move |ids, input| {
        let mut children = Vec::new();
        let mut rest = input;
        while let Some(m) = pattern.apply(ids, rest) {
            let zero_width = m.consumed == 0;
            rest = m.rest;
            children.push(m.tree);
            if zero_width {
                break;
            }
        }
        if at_least_one && children.is_empty() {
            return None;
        }
        Some(Match::composite(ids, input, children, rest))
    })
}

/// Greedily matches `pattern` zero or more times. Never fails.
pub fn repeat0(pattern: impl Into<PatternLike>) -> Pattern {
    repeat(to_pattern(pattern), false)
}

/// Greedily matches `pattern` one or more times.
pub fn repeat1(pattern: impl Into<PatternLike>) -> Pattern {
    repeat(to_pattern(pattern), true)
}

/// Zero or more `item`s separated by `separator`.
///
/// Accepts the empty list and a trailing separator.
pub fn separated_by0(item: impl Into<PatternLike>, separator: impl Into<PatternLike>) -> Pattern {
    let item = to_pattern(item);
    let separator = to_pattern(separator);
    seq([repeat0(seq([item.clone(), separator])), opt(item)])
}

/// One or more `item`s separated by `separator`.
pub fn separated_by1(item: impl Into<PatternLike>, separator: impl Into<PatternLike>) -> Pattern {
    let item = to_pattern(item);
    let separator = to_pattern(separator);
    seq([item.clone(), repeat0(seq([separator, item]))])
}

/// `pattern` surrounded by `around` on both sides.
pub fn enclosed_by(pattern: impl Into<PatternLike>, around: impl Into<PatternLike>) -> Pattern {
    let around = to_pattern(around);
    seq([around.clone(), to_pattern(pattern), around])
}

/// `pattern` between `(` and `)`.
pub fn parenthesized(pattern: impl Into<PatternLike>) -> Pattern {
    seq([PatternLike::from('('), pattern.into(), PatternLike::from(')')])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{char, char_one_of, char_repeat0, empty, eof, literal};

    // ==================== seq tests ====================

    #[test]
    fn test_seq() {
        let p = seq(["a", "b", "c"]);
        let m = p.apply_str("abcd").unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(m.tree.children().len(), 3);
        assert_eq!(m.rest.window(), "d");
    }

    #[test]
    fn test_seq_failure() {
        assert!(seq(["a", "b"]).apply_str("ac").is_none());
    }

    #[test]
    fn test_seq_empty_list() {
        let m = seq(Vec::<Pattern>::new()).apply_str("x").unwrap();
        assert_eq!(m.consumed, 0);
        assert!(m.tree.is_leaf());
    }

    #[test]
    fn test_seq_child_spans_are_contiguous() {
        let m = seq(["ab", "c", "de"]).apply_str("abcde").unwrap();
        let texts: Vec<_> = m.tree.children().iter().map(|c| c.text()).collect();
        assert_eq!(texts, vec!["ab", "c", "de"]);
        assert_eq!(m.tree.text(), "abcde");
    }

    // ==================== alt tests ====================

    #[test]
    fn test_alt_first_match_wins() {
        let p = alt(["a", "ab"]);
        let m = p.apply_str("abc").unwrap();
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn test_alt_falls_through() {
        let p = alt(["x", "y", "z"]);
        assert_eq!(p.apply_str("z").unwrap().consumed, 1);
        assert!(p.apply_str("w").is_none());
    }

    #[test]
    fn test_alt_wraps_winner() {
        let inner = crate::name("inner", "a");
        let m = crate::name("outer", alt([inner])).apply_str("a").unwrap();
        assert_eq!(m.tree.name(), Some("outer"));
        assert_eq!(m.tree.children().len(), 1);
        assert_eq!(m.tree.children()[0].name(), Some("inner"));
    }

    #[test]
    fn test_alt_empty_never_matches() {
        assert!(alt(Vec::<Pattern>::new()).apply_str("a").is_none());
    }

    #[test]
    fn test_either() {
        let p = either("true", "false");
        assert_eq!(p.apply_str("false").unwrap().consumed, 5);
        assert!(p.apply_str("maybe").is_none());
    }

    // ==================== opt tests ====================

    #[test]
    fn test_opt_present() {
        let m = opt("-").apply_str("-1").unwrap();
        assert_eq!(m.consumed, 1);
        assert_eq!(m.tree.children().len(), 1);
    }

    #[test]
    fn test_opt_absent() {
        let m = opt("-").apply_str("1").unwrap();
        assert_eq!(m.consumed, 0);
        assert!(m.tree.is_leaf());
        assert_eq!(m.rest.window(), "1");
    }

    // ==================== repeat tests ====================

    #[test]
    fn test_repeat0() {
        let m = repeat0("ab").apply_str("ababa").unwrap();
        assert_eq!(m.consumed, 4);
        assert_eq!(m.tree.children().len(), 2);
    }

    #[test]
    fn test_repeat0_never_fails() {
        let m = repeat0("x").apply_str("abc").unwrap();
        assert_eq!(m.consumed, 0);
        assert!(m.tree.is_leaf());
    }

    #[test]
    fn test_repeat1() {
        assert_eq!(repeat1(char('a')).apply_str("aab").unwrap().consumed, 2);
        assert!(repeat1(char('a')).apply_str("b").is_none());
    }

    #[test]
    fn test_repeat_is_greedy_without_backtracking() {
        let p = seq([repeat0(char('a')), char('a')]);
        assert!(p.apply_str("aa").is_none());
    }

    #[test]
    fn test_repeat_of_zero_width_terminates() {
        let m = repeat0(empty()).apply_str("abc").unwrap();
        assert_eq!(m.consumed, 0);
        assert_eq!(m.tree.children().len(), 1);
        let m = repeat0(opt("a")).apply_str("aab").unwrap();
        assert_eq!(m.consumed, 2);
        assert_eq!(m.tree.children().len(), 3);
    }

    #[test]
    fn test_repeat1_counts_zero_width_match() {
        let m = repeat1(empty()).apply_str("x").unwrap();
        assert_eq!(m.consumed, 0);
        assert_eq!(m.tree.children().len(), 1);
        assert_eq!(m.rest.window(), "x");

        let m = repeat1(char_repeat0(' ')).apply_str("x").unwrap();
        assert_eq!(m.consumed, 0);
        assert_eq!(m.tree.children().len(), 1);

        let m = repeat1(char_repeat0(' ')).apply_str("  x").unwrap();
        assert_eq!(m.consumed, 2);
        assert_eq!(m.tree.children().len(), 2);
    }

    #[test]
    fn test_repeat1_fails_when_item_never_matches() {
        assert!(repeat1(eof()).apply_str("x").is_none());
    }

    // ==================== separated list tests ====================

    #[test]
    fn test_separated_by1() {
        let p = separated_by1(char_one_of("0123456789"), ",");
        assert_eq!(p.apply_str("1,2,3").unwrap().consumed, 5);
        assert_eq!(p.apply_str("1,2,").unwrap().consumed, 3);
        assert!(p.apply_str("").is_none());
    }

    #[test]
    fn test_separated_by0() {
        let p = separated_by0(char_one_of("0123456789"), ",");
        assert_eq!(p.apply_str("").unwrap().consumed, 0);
        assert_eq!(p.apply_str("1").unwrap().consumed, 1);
        assert_eq!(p.apply_str("1,2,3").unwrap().consumed, 5);
        assert_eq!(p.apply_str("1,2,").unwrap().consumed, 4);
    }

    // ==================== enclosing tests ====================

    #[test]
    fn test_enclosed_by() {
        let ws = crate::combinators::char_one_of_repeat0(" ");
        let m = enclosed_by("x", ws).apply_str("  x  y").unwrap();
        assert_eq!(m.consumed, 5);
        assert_eq!(m.rest.window(), "y");
    }

    #[test]
    fn test_parenthesized() {
        let p = parenthesized(literal("1"));
        assert_eq!(p.apply_str("(1)").unwrap().consumed, 3);
        assert!(p.apply_str("(1").is_none());
    }
}
