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

//! Primitive matchers: the leaves of every parse tree.
//!
//! Each primitive produces a single childless node over the text it
//! consumed. Single-character matchers take a Rust `char`, so the
//! one-character rule is checked by the type system; the remaining argument
//! checks (inverted ranges, unanchored or malformed regexes) are reported as
//! a [`GrammarError`] when the pattern is built, never while matching.

use crate::error::{GrammarError, GrammarResult};
use crate::pattern::{Match, Pattern};
use memchr::memmem;
use regex::Regex;

/// A single-character test.
#[derive(Debug, Clone)]
enum CharClass {
    Exactly(char),
    Not(char),
    OneOf(Vec<char>),
    NoneOf(Vec<char>),
    Range(char, char),
}

impl CharClass {
    #[inline]
    fn matches(&self, c: char) -> bool {
        match self {
            Self::Exactly(expected) => c == *expected,
            Self::Not(rejected) => c != *rejected,
            Self::OneOf(set) => set.contains(&c),
            Self::NoneOf(set) => !set.contains(&c),
            Self::Range(lo, hi) => (*lo..=*hi).contains(&c),
        }
    }

    fn range(lo: char, hi: char) -> GrammarResult<Self> {
        if lo > hi {
            return Err(GrammarError::InvertedRange { from: lo, to: hi });
        }
        Ok(Self::Range(lo, hi))
    }
}

/// Matches exactly one character of `class`.
fn single(class: CharClass) -> Pattern {
    Pattern::new(move |ids, input| {
        let c = input.first_char()?;
        if !class.matches(c) {
            return None;
        }
        Match::leaf(ids, input, c.len_utf8())
    })
}

/// Greedily matches a run of `class` characters as one leaf.
fn run(class: CharClass, at_least_one: bool) -> Pattern {
    Pattern::new(move |ids, input| {
        let window = input.window();
        let len = window
            .char_indices()
            .find(|&(_, c)| !class.matches(c))
            .map_or(window.len(), |(offset, _)| offset);
        if at_least_one && len == 0 {
            return None;
        }
        Match::leaf(ids, input, len)
    })
}

pub(crate) fn range_unchecked(lo: char, hi: char) -> Pattern {
    single(CharClass::Range(lo, hi))
}

pub(crate) fn range_run_unchecked(lo: char, hi: char, at_least_one: bool) -> Pattern {
    run(CharClass::Range(lo, hi), at_least_one)
}

// ==================== Literal text ====================

/// Matches when the input starts with `text`.
pub fn literal(text: impl Into<String>) -> Pattern {
    let text = text.into();
    Pattern::new(move |ids, input| {
        if !input.window().starts_with(text.as_str()) {
            return None;
        }
        Match::leaf(ids, input, text.len())
    })
}

// ==================== Single characters ====================

/// Matches the character `c`.
pub fn char(c: char) -> Pattern {
    single(CharClass::Exactly(c))
}

/// Matches zero or more `c` characters.
pub fn char_repeat0(c: char) -> Pattern {
    run(CharClass::Exactly(c), false)
}

/// Matches one or more `c` characters.
pub fn char_repeat1(c: char) -> Pattern {
    run(CharClass::Exactly(c), true)
}

/// Matches any single character except `c`.
pub fn not_char(c: char) -> Pattern {
    single(CharClass::Not(c))
}

/// Matches zero or more characters other than `c`.
pub fn not_char_repeat0(c: char) -> Pattern {
    run(CharClass::Not(c), false)
}

/// Matches one or more characters other than `c`.
pub fn not_char_repeat1(c: char) -> Pattern {
    run(CharClass::Not(c), true)
}

/// Matches one character contained in `set`.
pub fn char_one_of(set: &str) -> Pattern {
    single(CharClass::OneOf(set.chars().collect()))
}

/// Matches zero or more characters contained in `set`.
pub fn char_one_of_repeat0(set: &str) -> Pattern {
    run(CharClass::OneOf(set.chars().collect()), false)
}

/// Matches one or more characters contained in `set`.
pub fn char_one_of_repeat1(set: &str) -> Pattern {
    run(CharClass::OneOf(set.chars().collect()), true)
}

/// Matches one character not contained in `set`.
pub fn char_none_of(set: &str) -> Pattern {
    single(CharClass::NoneOf(set.chars().collect()))
}

/// Matches zero or more characters not contained in `set`.
pub fn char_none_of_repeat0(set: &str) -> Pattern {
    run(CharClass::NoneOf(set.chars().collect()), false)
}

/// Matches one or more characters not contained in `set`.
pub fn char_none_of_repeat1(set: &str) -> Pattern {
    run(CharClass::NoneOf(set.chars().collect()), true)
}

/// Matches one character in `lo..=hi`.
///
/// Fails to build if `lo > hi`.
pub fn char_range(lo: char, hi: char) -> GrammarResult<Pattern> {
    CharClass::range(lo, hi).map(single)
}

/// Matches zero or more characters in `lo..=hi`.
pub fn char_range_repeat0(lo: char, hi: char) -> GrammarResult<Pattern> {
    CharClass::range(lo, hi).map(|class| run(class, false))
}

/// Matches one or more characters in `lo..=hi`.
pub fn char_range_repeat1(lo: char, hi: char) -> GrammarResult<Pattern> {
    CharClass::range(lo, hi).map(|class| run(class, true))
}

// ==================== Regex and scanning ====================

/// Matches a regular expression at the start of the input.
///
/// The pattern must begin with `^`.
///
/// # Examples
///
/// ```
/// use strand_core::combinators::regex;
///
/// let number = regex(r"^-?(0|[1-9][0-9]*)").unwrap();
/// assert_eq!(number.apply_str("-120 apples").unwrap().consumed, 4);
/// assert!(regex("[0-9]+").is_err());
/// ```
pub fn regex(pattern: &str) -> GrammarResult<Pattern> {
    if !pattern.starts_with('^') {
        return Err(GrammarError::UnanchoredRegex {
            pattern: pattern.to_string(),
        });
    }
    let re = Regex::new(pattern).map_err(|e| GrammarError::InvalidRegex {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    Ok(Pattern::new(move |ids, input| {
        let found = re.find(input.window())?;
        if found.start() != 0 {
            return None;
        }
        Match::leaf(ids, input, found.end())
    }))
}

/// Consumes everything up to, not including, the first `delimiter`.
///
/// Fails if the delimiter does not occur in the remaining input.
pub fn until(delimiter: impl Into<String>) -> Pattern {
    let delimiter = delimiter.into();
    let finder = memmem::Finder::new(delimiter.as_bytes()).into_owned();
    Pattern::new(move |ids, input| {
        let offset = finder.find(input.window().as_bytes())?;
        Match::leaf(ids, input, offset)
    })
}

// ==================== Zero-width ====================

/// Always matches, consuming nothing.
pub fn empty() -> Pattern {
    Pattern::new(|ids, input| Some(Match::epsilon(ids, input)))
}

/// Matches only at the end of the input.
pub fn eof() -> Pattern {
    Pattern::new(|ids, input| {
        if input.is_empty() {
            Some(Match::epsilon(ids, input))
        } else {
            None
        }
    })
}
