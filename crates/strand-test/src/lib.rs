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

//! Shared fixture grammars and utilities for testing Strand.
//!
//! The grammars here are ordinary users of `strand-core`: they exercise the
//! combinators the way a downstream crate would and give every test suite
//! the same reference inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use strand_core::{parse_with_options, ParseOptions};
//! use strand_test::{calc, named_shape};
//!
//! let expr = calc::pattern().unwrap();
//! let opts = ParseOptions::builder().project(true).build();
//! let out = parse_with_options(&expr, "1+2*3", &opts).unwrap();
//!
//! assert_eq!(named_shape(&out.tree), "_(add(num mul(num num)))");
//! assert_eq!(calc::evaluate(&out.tree), Ok(7));
//! ```

use strand_core::{GrammarResult, Pattern, Tree};
use tracing_subscriber::{fmt, EnvFilter};

pub mod grammars;

pub use grammars::{calc, json, sexpr, wiki};

/// A named fixture grammar: its entry pattern and inputs it accepts.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Short fixture name.
    pub name: &'static str,
    /// Builds the grammar's entry pattern.
    pub pattern: fn() -> GrammarResult<Pattern>,
    /// Inputs the entry pattern parses completely.
    pub samples: &'static [&'static str],
}

/// Every fixture grammar.
pub fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "calc",
            pattern: calc::pattern,
            samples: calc::SAMPLES,
        },
        Fixture {
            name: "json",
            pattern: json::pattern,
            samples: json::SAMPLES,
        },
        Fixture {
            name: "sexpr",
            pattern: sexpr::pattern,
            samples: sexpr::SAMPLES,
        },
        Fixture {
            name: "wiki",
            pattern: wiki::pattern,
            samples: wiki::SAMPLES,
        },
    ]
}

/// Installs a test-friendly `tracing` subscriber.
///
/// Honors `RUST_LOG` and defaults to `strand_core=debug`. Safe to call from
/// every test; only the first call installs anything.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strand_core=debug"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

/// Renders the named structure of a tree as `name(child child ...)`.
///
/// Unnamed nodes render as `_`; leaves render without parentheses. Hidden
/// nodes render with their name. Combined with projection this gives a
/// compact, text-free picture of what a grammar recognized.
pub fn named_shape(tree: &Tree<'_>) -> String {
    let label = tree.name().unwrap_or("_");
    if tree.is_leaf() {
        return label.to_string();
    }
    let children: Vec<String> = tree.children().iter().map(named_shape).collect();
    format!("{}({})", label, children.join(" "))
}

/// The texts of a tree's direct children.
pub fn child_texts<'s>(tree: &Tree<'s>) -> Vec<&'s str> {
    tree.children().iter().map(Tree::text).collect()
}
