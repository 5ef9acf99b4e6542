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

//! The combinator library.
//!
//! - [`primitive`]: literals, character classes, regexes and scanners
//! - [`structural`]: sequence, choice, option and repetition
//! - [`assoc`]: recursion elimination and binary operator chains
//! - [`lookahead`]: positive and negative guards
//! - [`transform`]: result rewriting and metadata
//! - [`common`]: ready-made character classes
//!
//! Every function here returns a [`Pattern`](crate::Pattern). Arguments
//! typed `impl Into<PatternLike>` accept string literals, characters or
//! patterns interchangeably.

pub mod assoc;
pub mod common;
pub mod lookahead;
pub mod primitive;
pub mod structural;
pub mod transform;

pub use assoc::{assoc_bin_left, assoc_bin_left_map, assoc_left, assoc_right};
pub use common::{
    crlf, digit, digit_bin, digit_hex, digit_hex_lower, digit_hex_upper, digit_oct, digits0,
    digits1, latin, latin_lower, latin_upper, space_tab_lf0, space_tab_lf1,
};
pub use lookahead::{lookahead, negative_lookahead};
pub use primitive::{
    char, char_none_of, char_none_of_repeat0, char_none_of_repeat1, char_one_of,
    char_one_of_repeat0, char_one_of_repeat1, char_range, char_range_repeat0, char_range_repeat1,
    char_repeat0, char_repeat1, empty, eof, literal, not_char, not_char_repeat0, not_char_repeat1,
    regex, until,
};
pub use structural::{
    alt, either, enclosed_by, opt, parenthesized, repeat0, repeat1, separated_by0, separated_by1,
    seq,
};
pub use transform::{map, map_error, map_success, with_meta};
