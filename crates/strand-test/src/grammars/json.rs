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

//! A JSON subset.
//!
//! Strings have no escape sequences, and a document may not start or end
//! with whitespace. Whitespace is a hidden `ws` rule, so a projected tree
//! holds only `value`, `object`, `array`, `string`, `number`, `boolean` and
//! `null` nodes.
//!
//! Object member values are wrapped in a named `value` node; array elements
//! are not, so `{"a":[1,2,3]}` projects to
//! `value(object(string value(array(number number number))))`.

use strand_core::combinators::{
    alt, char_one_of_repeat0, either, opt, regex, separated_by1, seq, until, with_meta,
};
use strand_core::{hidden, name, rec, rule, Grammar, GrammarResult, MetaValue, Pattern, PatternLike};

/// Inputs [`pattern`] parses completely.
pub const SAMPLES: &[&str] = &[
    "null",
    "true",
    "-12.5e3",
    "\"text\"",
    "[]",
    "{}",
    "{\"a\":[1,2,3]}",
    "{ \"name\" : \"strand\", \"tags\" : [ \"parser\" , \"peg\" ], \"meta\" : { \"stable\" : false } }",
];

fn ws() -> Pattern {
    hidden("ws", char_one_of_repeat0("\n\r\t "))
}

/// `ws c ws`
fn punct(c: char) -> Pattern {
    seq([PatternLike::from(ws()), c.into(), ws().into()])
}

/// `open ws inner? ws close`
fn bracketed(open: char, inner: Pattern, close: char) -> Pattern {
    seq([
        PatternLike::from(open),
        ws().into(),
        opt(inner).into(),
        ws().into(),
        close.into(),
    ])
}

fn string() -> Pattern {
    let quoted = seq([PatternLike::from('"'), until("\"").into(), '"'.into()]);
    name(
        "string",
        with_meta(quoted, "value", |text| {
            let inner = text.strip_prefix('"')?.strip_suffix('"')?;
            Some(MetaValue::Text(inner.to_string()))
        }),
    )
}

fn number() -> GrammarResult<Pattern> {
    let literal = regex(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?")?;
    Ok(name(
        "number",
        with_meta(literal, "value", |text| {
            text.parse().ok().map(MetaValue::Float)
        }),
    ))
}

fn boolean() -> Pattern {
    name(
        "boolean",
        with_meta(either("true", "false"), "value", |text| {
            Some(MetaValue::Bool(text == "true"))
        }),
    )
}

/// Builds the JSON grammar.
pub fn grammar() -> GrammarResult<Grammar> {
    rec([
        rule("value", |r| Ok(name("value", r.get("element")?))),
        rule("element", |r| {
            Ok(alt([
                name("null", "null"),
                boolean(),
                number()?,
                string(),
                r.get("array")?,
                r.get("object")?,
            ]))
        }),
        rule("array", |r| {
            let items = separated_by1(r.get("element")?, punct(','));
            Ok(name("array", bracketed('[', items, ']')))
        }),
        rule("object", |r| {
            let member = seq([string(), punct(':'), r.get("value")?]);
            let members = separated_by1(member, punct(','));
            Ok(name("object", bracketed('{', members, '}')))
        }),
    ])
}

/// The `value` entry rule.
pub fn pattern() -> GrammarResult<Pattern> {
    grammar()?.get("value")
}
