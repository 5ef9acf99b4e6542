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

//! Wiki link markup: `[[target]]` inside free text.
//!
//! Markup never fails. Unbalanced brackets are kept as plain text, and only
//! well-formed links become named `link` nodes.

use strand_core::combinators::{
    alt, char_none_of_repeat1, char_one_of, negative_lookahead, repeat0, seq,
};
use strand_core::{hidden, name, GrammarResult, Pattern};

/// Inputs [`pattern`] parses completely.
pub const SAMPLES: &[&str] = &[
    "",
    "plain text",
    "see [[Rust]] and [[Cargo]]",
    "aaaa]] bdfjddfd [[  ajdfjak]  adfkaj  dafja [ dajfa ] 1]] dkjfa ]] kk [[ kjha",
];

const SPECIAL: &str = "[]";

/// The `markup` pattern.
///
/// The grammar has no recursive rules, so it is built from plain patterns.
pub fn pattern() -> GrammarResult<Pattern> {
    let ll = hidden("ll", "[[");
    let rr = hidden("rr", "]]");
    let word = hidden("word", char_none_of_repeat1(SPECIAL));
    let special = char_one_of(SPECIAL);

    let link_inner = repeat0(alt([word.clone(), negative_lookahead(special.clone(), rr.clone())]));
    let link = name("link", seq([ll, link_inner, rr]));

    Ok(name("markup", repeat0(alt([link, word, special]))))
}
