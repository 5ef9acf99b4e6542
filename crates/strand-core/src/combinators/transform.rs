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

//! Result transformers and metadata.
//!
//! A transformer receives whatever its inner pattern produced and may
//! rewrite, reject or replace it. Rewritten trees must still satisfy the
//! match contract: the returned `rest` is the input advanced by `consumed`.

use crate::id::IdAllocator;
use crate::pattern::{to_pattern, Match, MatchResult, Pattern, PatternLike};
use crate::tree::MetaValue;
use crate::view::SourceView;

/// Rewrites the result of `pattern`, success or failure.
pub fn map<F>(pattern: impl Into<PatternLike>, f: F) -> Pattern
where
    F: for<'s> Fn(MatchResult<'s>) -> MatchResult<'s> + Send + Sync + 'static,
{
    let pattern = to_pattern(pattern);
    Pattern::new(move |ids, input| f(pattern.apply(ids, input)))
}

/// Rewrites successful matches of `pattern`; failures pass through.
///
/// Returning `None` from `f` rejects the match.
pub fn map_success<F>(pattern: impl Into<PatternLike>, f: F) -> Pattern
where
    F: for<'s> Fn(Match<'s>) -> MatchResult<'s> + Send + Sync + 'static,
{
    let pattern = to_pattern(pattern);
    Pattern::new(move |ids, input| pattern.apply(ids, input).and_then(&f))
}

/// Replaces a failure of `pattern` with the result of `f` at the same input.
///
/// Useful for error recovery: `f` may consume input and produce a marker
/// node in place of the missing construct.
pub fn map_error<F>(pattern: impl Into<PatternLike>, f: F) -> Pattern
where
    F: for<'s> Fn(&IdAllocator, SourceView<'s>) -> MatchResult<'s> + Send + Sync + 'static,
{
    let pattern = to_pattern(pattern);
    Pattern::new(move |ids, input| pattern.apply(ids, input).or_else(|| f(ids, input)))
}

/// Attaches a metadata value computed from the matched text.
///
/// `f` sees the text of the match; returning `None` rejects the match.
///
/// # Examples
///
/// ```
/// use strand_core::combinators::{char_range_repeat1, with_meta};
/// use strand_core::MetaValue;
///
/// let digits = char_range_repeat1('0', '9').unwrap();
/// let number = with_meta(digits, "value", |text| text.parse::<i64>().ok().map(MetaValue::Int));
///
/// let m = number.apply_str("42").unwrap();
/// assert_eq!(m.tree.meta_value("value").and_then(MetaValue::as_int), Some(42));
/// ```
pub fn with_meta<F>(pattern: impl Into<PatternLike>, key: impl Into<String>, f: F) -> Pattern
where
    F: Fn(&str) -> Option<MetaValue> + Send + Sync + 'static,
{
    let pattern = to_pattern(pattern);
    let key = key.into();
    Pattern::new(move |ids, input| {
        let mut m = pattern.apply(ids, input)?;
        let value = f(m.tree.text())?;
        m.tree.insert_meta(key.clone(), value);
        Some(m)
    })
}
