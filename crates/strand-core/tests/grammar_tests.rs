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

//! Recursive grammars built from the public API.

use strand_core::combinators::{
    alt, char_range_repeat1, opt, parenthesized, separated_by0, seq, space_tab_lf0,
};
use strand_core::{name, parse, parse_with_options, rec, rule, Grammar, ParseOptions};

/// list ::= "(" (item ("," item)*)? ")" ; item ::= number | list
fn nested_lists() -> Grammar {
    rec([
        rule("number", |_| Ok(name("number", char_range_repeat1('0', '9')?))),
        rule("item", |r| Ok(alt([r.get("number")?, r.get("list")?]))),
        rule("list", |r| {
            let item = seq([space_tab_lf0(), r.get("item")?, space_tab_lf0()]);
            Ok(name("list", parenthesized(separated_by0(item, ","))))
        }),
    ])
    .unwrap()
}

#[test]
fn test_nested_lists() {
    let list = nested_lists().get("list").unwrap();
    assert!(parse(&list, "()").is_ok());
    assert!(parse(&list, "(1, (2, 3), ((4)))").is_ok());
    assert!(parse(&list, "(1, (2, 3)").is_err());
}

#[test]
fn test_nested_lists_projection() {
    let list = nested_lists().get("list").unwrap();
    let opts = ParseOptions::builder().project(true).build();
    let out = parse_with_options(&list, "(1,(2,3))", &opts).unwrap();

    let root = &out.tree;
    assert_eq!(root.name(), Some("list"));
    assert_eq!(root.children().len(), 2);
    assert_eq!(root.children()[0].name(), Some("number"));
    assert_eq!(root.children()[1].name(), Some("list"));
    assert_eq!(root.children()[1].children().len(), 2);
    assert_eq!(root.children()[1].text(), "(2,3)");
}

#[test]
fn test_deep_nesting() {
    let list = nested_lists().get("list").unwrap();
    let depth = 64;
    let text = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&list, &text).unwrap().consumed, text.len());
}

#[test]
fn test_grammar_shared_across_threads() {
    let list = nested_lists().get("list").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let list = list.clone();
            std::thread::spawn(move || {
                let text = format!("({}, ({}))", i, i + 1);
                parse(&list, &text).map(|out| out.consumed)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}

#[test]
fn test_optional_tail() {
    let g = rec([rule("signed", |_| {
        Ok(seq([opt("-"), char_range_repeat1('0', '9')?]))
    })])
    .unwrap();
    let signed = g.get("signed").unwrap();
    assert_eq!(parse(&signed, "-12").unwrap().consumed, 3);
    assert_eq!(parse(&signed, "12").unwrap().consumed, 2);
}
