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

//! Span-addressed views over source text.
//!
//! A [`SourceView`] is an immutable `(text, start..end)` pair. Every combinator
//! reads its input through a view and hands the unconsumed remainder to the
//! next one as a new view, so backtracking never has to undo anything: the
//! caller still holds the original.
//!
//! Offsets are byte offsets into the UTF-8 text and always fall on character
//! boundaries. Derived views are produced by [`take`](SourceView::take),
//! [`skip`](SourceView::skip) and [`slice`](SourceView::slice), which return
//! a [`ViewError`] instead of clamping when asked for an impossible range.
//!
//! # Examples
//!
//! ```
//! use strand_core::SourceView;
//!
//! let view = SourceView::new("hello world");
//! let hello = view.take(5).unwrap();
//! let rest = view.skip(6).unwrap();
//!
//! assert_eq!(hello.window(), "hello");
//! assert_eq!(rest.window(), "world");
//! assert_eq!(rest.start(), 6);
//! assert!(view.take(100).is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Invalid sub-range requested from a [`SourceView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// More bytes were requested than the view holds.
    #[error("requested {requested} bytes but only {available} are visible")]
    OutOfBounds { requested: usize, available: usize },

    /// A slice whose start lies after its end.
    #[error("inverted range {start}..{end}")]
    InvertedRange { start: usize, end: usize },

    /// The offset would split a multi-byte character.
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Result of deriving a view.
pub type ViewResult<'s> = Result<SourceView<'s>, ViewError>;

/// An immutable window `[start, end)` into a source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceView<'s> {
    text: &'s str,
    start: usize,
    end: usize,
}

impl<'s> SourceView<'s> {
    /// Creates a view covering the whole text.
    #[inline]
    pub const fn new(text: &'s str) -> Self {
        Self {
            text,
            start: 0,
            end: text.len(),
        }
    }

    /// Creates a view over `start..end` of `text`, validating the range.
    pub fn with_span(text: &'s str, start: usize, end: usize) -> ViewResult<'s> {
        if start > end {
            return Err(ViewError::InvertedRange { start, end });
        }
        if end > text.len() {
            return Err(ViewError::OutOfBounds {
                requested: end,
                available: text.len(),
            });
        }
        for offset in [start, end] {
            if !text.is_char_boundary(offset) {
                return Err(ViewError::NotCharBoundary { offset });
            }
        }
        Ok(Self { text, start, end })
    }

    /// The complete underlying text, independent of the span.
    #[inline]
    pub const fn source(&self) -> &'s str {
        self.text
    }

    /// Start offset (inclusive) into the underlying text.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive) into the underlying text.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of visible bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if nothing is visible.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The substring denoted by the span.
    #[inline]
    pub fn window(&self) -> &'s str {
        &self.text[self.start..self.end]
    }

    /// The first visible character, if any.
    #[inline]
    pub fn first_char(&self) -> Option<char> {
        self.window().chars().next()
    }

    /// The first `n` visible bytes as a new view.
    pub fn take(&self, n: usize) -> ViewResult<'s> {
        self.check_len(n)?;
        Ok(Self {
            end: self.start + n,
            ..*self
        })
    }

    /// Everything after the first `n` visible bytes as a new view.
    pub fn skip(&self, n: usize) -> ViewResult<'s> {
        self.check_len(n)?;
        Ok(Self {
            start: self.start + n,
            ..*self
        })
    }

    /// The sub-range `a..b`, relative to the start of this view.
    pub fn slice(&self, a: usize, b: usize) -> ViewResult<'s> {
        if a > b {
            return Err(ViewError::InvertedRange { start: a, end: b });
        }
        self.check_len(b)?;
        self.check_len(a)?;
        Ok(Self {
            start: self.start + a,
            end: self.start + b,
            ..*self
        })
    }

    /// A zero-width view at the start of this one.
    #[inline]
    pub const fn take_nothing(&self) -> Self {
        Self {
            text: self.text,
            start: self.start,
            end: self.start,
        }
    }

    /// The part of `self` that lies before `rest`.
    ///
    /// `rest` must be a suffix view derived from `self`; combinators use this
    /// to recover the span they consumed from the remainder they hand on.
    #[inline]
    pub fn consumed_until(&self, rest: &SourceView<'s>) -> Self {
        debug_assert!(self.start <= rest.start && rest.start <= self.end);
        Self {
            text: self.text,
            start: self.start,
            end: rest.start,
        }
    }

    /// The smallest view covering both `self` and `other`.
    #[inline]
    pub fn cover(&self, other: &SourceView<'s>) -> Self {
        Self {
            text: self.text,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    fn check_len(&self, n: usize) -> Result<(), ViewError> {
        if n > self.len() {
            return Err(ViewError::OutOfBounds {
                requested: n,
                available: self.len(),
            });
        }
        if !self.text.is_char_boundary(self.start + n) {
            return Err(ViewError::NotCharBoundary {
                offset: self.start + n,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for SourceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceView({}..{}, {:?})", self.start, self.end, self.window())
    }
}

impl fmt::Display for SourceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.window())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SourceView<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SourceView", 3)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("text", self.window())?;
        state.end()
    }
}
