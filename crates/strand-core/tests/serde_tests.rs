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

//! JSON export of trees.

#![cfg(feature = "serde")]

use serde_json::json;
use strand_core::combinators::{char_range_repeat1, seq, with_meta};
use strand_core::{hidden, name, MetaValue};

#[test]
fn test_leaf_serializes_span_and_meta() {
    let number = with_meta(
        name("number", char_range_repeat1('0', '9').unwrap()),
        "value",
        |t| t.parse().ok().map(MetaValue::Int),
    );
    let m = number.apply_str("42").unwrap();
    let value = serde_json::to_value(&m.tree).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "name": "number",
            "hidden": false,
            "span": { "start": 0, "end": 2, "text": "42" },
            "meta": { "value": 42 }
        })
    );
}

#[test]
fn test_children_and_hidden_flag() {
    let p = name("pair", seq([hidden("a", "a"), name("b", "b")]));
    let m = p.apply_str("ab").unwrap();
    let value = serde_json::to_value(&m.tree).unwrap();
    assert_eq!(value["name"], "pair");
    assert_eq!(value["children"][0]["hidden"], true);
    assert_eq!(value["children"][1]["span"]["text"], "b");
    assert_eq!(value["children"][1]["span"]["start"], 1);
}

#[test]
fn test_unnamed_leaf_omits_optional_fields() {
    let m = strand_core::combinators::literal("x").apply_str("x").unwrap();
    let value = serde_json::to_value(&m.tree).unwrap();
    assert!(value.get("name").is_none());
    assert!(value.get("children").is_none());
    assert!(value.get("meta").is_none());
}

#[test]
fn test_meta_values_are_untagged() {
    assert_eq!(serde_json::to_value(MetaValue::Text("s".into())).unwrap(), json!("s"));
    assert_eq!(serde_json::to_value(MetaValue::Float(1.5)).unwrap(), json!(1.5));
    assert_eq!(serde_json::to_value(MetaValue::Bool(true)).unwrap(), json!(true));
}
