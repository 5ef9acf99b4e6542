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

//! Lookahead guards.

use crate::pattern::{to_pattern, Pattern, PatternLike};

/// Applies `pattern` only if `predicate` also matches at the same position.
///
/// The predicate consumes nothing and contributes nothing to the tree.
pub fn lookahead(pattern: impl Into<PatternLike>, predicate: impl Into<PatternLike>) -> Pattern {
    let pattern = to_pattern(pattern);
    let predicate = to_pattern(predicate);
    Pattern::new(move |ids, input| {
        predicate.apply(ids, input)?;
        pattern.apply(ids, input)
    })
}

/// Applies `pattern` only if `predicate` does not match at the same position.
///
/// # Examples
///
/// ```
/// use strand_core::combinators::{negative_lookahead, not_char};
///
/// // any character that does not start a closing "]]"
/// let body_char = negative_lookahead(not_char('\n'), "]]");
/// assert!(body_char.apply_str("]x").is_some());
/// assert!(body_char.apply_str("]]").is_none());
/// ```
pub fn negative_lookahead(
    pattern: impl Into<PatternLike>,
    predicate: impl Into<PatternLike>,
) -> Pattern {
    let pattern = to_pattern(pattern);
    let predicate = to_pattern(predicate);
    Pattern::new(move |ids, input| {
        if predicate.apply(ids, input).is_some() {
            return None;
        }
        pattern.apply(ids, input)
    })
}
