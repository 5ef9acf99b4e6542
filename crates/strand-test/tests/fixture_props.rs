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

//! Property tests over the fixture grammars.

use proptest::prelude::*;
use strand_core::{parse, parse_with_options, ParseOptions, TreeStats};
use strand_test::{calc, fixtures, init_tracing, wiki};

/// A random arithmetic expression and its value under truncating division.
fn arb_expr() -> impl Strategy<Value = (String, i64)> {
    let leaf = (-9i64..=9).prop_map(|n| (n.to_string(), n));
    leaf.prop_recursive(3, 8, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!['+', '-', '*']), inner).prop_map(
            |((lt, lv), op, (rt, rv))| {
                let value = match op {
                    '+' => lv + rv,
                    '-' => lv - rv,
                    _ => lv * rv,
                };
                (format!("({}) {} ({})", lt, op, rt), value)
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: fully parenthesized expressions evaluate like Rust does.
    #[test]
    fn prop_calc_matches_native(case in arb_expr()) {
        let (text, expected) = case;
        let out = parse(&calc::pattern().unwrap(), &text).unwrap();
        prop_assert_eq!(calc::evaluate(&out.tree), Ok(expected));
    }

    /// Property: subtraction chains fold to the left.
    #[test]
    fn prop_calc_left_fold(a in 0i64..1000, b in 0i64..1000, c in 0i64..1000) {
        let text = format!("{}-{}-{}", a, b, c);
        let out = parse(&calc::pattern().unwrap(), &text).unwrap();
        prop_assert_eq!(calc::evaluate(&out.tree), Ok(a - b - c));
    }

    /// Property: multiplication binds tighter than addition.
    #[test]
    fn prop_calc_precedence(a in 0i64..1000, b in 0i64..1000, c in 1i64..1000) {
        let text = format!("{} + {} * {} / {}", a, b, c, c);
        let out = parse(&calc::pattern().unwrap(), &text).unwrap();
        prop_assert_eq!(calc::evaluate(&out.tree), Ok(a + b * c / c));
    }

    /// Property: wiki markup accepts any input.
    #[test]
    fn prop_wiki_total(text in "[a-z \\[\\]]{0,40}") {
        let out = parse(&wiki::pattern().unwrap(), &text);
        prop_assert!(out.is_ok());
    }
}

#[test]
fn test_every_fixture_parses_its_samples() {
    init_tracing();
    let opts = ParseOptions::builder().project(true).build();
    for fixture in fixtures() {
        let pattern = (fixture.pattern)().unwrap();
        for sample in fixture.samples {
            let out = parse_with_options(&pattern, sample, &opts);
            assert!(out.is_ok(), "{} failed on {:?}", fixture.name, sample);
        }
    }
}

#[test]
fn test_projection_drops_hidden_nodes() {
    let opts = ParseOptions::builder().project(true).build();
    let value = strand_test::json::pattern().unwrap();
    let out = parse_with_options(&value, "[ 1 , 2 ]", &opts).unwrap();
    let stats = TreeStats::collect(&out.tree);
    assert_eq!(stats.hidden, 0);
    assert_eq!(stats.nodes, 4);
}
