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

//! Scheme-style S-expressions.

use strand_core::combinators::{alt, char_one_of_repeat0, regex, repeat0, seq, until};
use strand_core::{hidden, name, rec, rule, Grammar, GrammarResult, Pattern, PatternLike};

/// Inputs [`pattern`] parses completely.
pub const SAMPLES: &[&str] = &[
    "42",
    "\"hello\"",
    "()",
    "(+ 1 2)",
    "(define (factorial n)\n  (if (<= n 1)\n      1\n      (* n (factorial (- n 1)))))",
    "  (list -0.5 \"s\" sym!)  ",
];

/// Builds the S-expression grammar.
pub fn grammar() -> GrammarResult<Grammar> {
    rec([
        rule("atom", |_| {
            let number = name("number", regex(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?")?);
            let string = name(
                "string",
                seq([PatternLike::from('"'), until("\"").into(), '"'.into()]),
            );
            let ident = name(
                "ident",
                regex(r"^[a-zA-Z!$%&*+\-./:<=>?@^_~][0-9a-zA-Z!$%&*+\-./:<=>?@^_~]*")?,
            );
            Ok(alt([number, string, ident]))
        }),
        rule("list", |r| {
            let items = repeat0(r.get("valueWs")?);
            Ok(name("list", seq([PatternLike::from('('), items.into(), ')'.into()])))
        }),
        rule("value", |r| Ok(alt([r.get("atom")?, r.get("list")?]))),
        rule("valueWs", |r| {
            let ws = hidden("ws", char_one_of_repeat0("\n\r\t "));
            Ok(seq([ws.clone(), r.get("value")?, ws]))
        }),
    ])
}

/// The `valueWs` entry rule: one value with surrounding whitespace.
pub fn pattern() -> GrammarResult<Pattern> {
    grammar()?.get("valueWs")
}
