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

//! Recursive grammars.
//!
//! Patterns are values, so a rule cannot refer to itself (or to a rule
//! defined after it) by construction alone. A [`Grammar`] is built in two
//! phases:
//!
//! 1. every rule name is registered as an empty slot in a shared arena;
//! 2. every rule body runs with a [`Rules`] handle, whose
//!    [`get`](Rules::get) returns an indirection pattern that looks the slot
//!    up when it is applied.
//!
//! References to names no rule defines, and names defined twice, are
//! reported as [`GrammarError`]s by [`GrammarBuilder::build`]. Once built,
//! every slot is filled and the grammar is immutable.
//!
//! Indirections created inside rule bodies hold a weak pointer to the arena,
//! so cyclic grammars do not leak. Patterns handed out by [`Grammar::get`]
//! hold a strong pointer and keep the whole grammar alive.
//!
//! # Examples
//!
//! ```
//! use strand_core::combinators::{alt, char_range, parenthesized};
//! use strand_core::Grammar;
//!
//! let grammar = Grammar::builder()
//!     .rule("expr", |r| Ok(alt([r.get("group")?, char_range('0', '9')?])))
//!     .rule("group", |r| Ok(parenthesized(r.get("expr")?)))
//!     .build()
//!     .unwrap();
//!
//! let expr = grammar.get("expr").unwrap();
//! assert_eq!(expr.apply_str("((7))").unwrap().consumed, 5);
//! ```

use crate::error::{GrammarError, GrammarResult};
use crate::pattern::Pattern;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, Weak};
use tracing::{debug, error};

type RuleBody = Box<dyn FnOnce(&Rules<'_>) -> GrammarResult<Pattern>>;

/// A named rule body, not yet built.
pub struct RuleDef {
    name: Arc<str>,
    body: RuleBody,
}

impl std::fmt::Debug for RuleDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDef")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Defines a rule for [`rec`].
pub fn rule<F>(name: impl Into<Arc<str>>, body: F) -> RuleDef
where
    F: FnOnce(&Rules<'_>) -> GrammarResult<Pattern> + 'static,
{
    RuleDef {
        name: name.into(),
        body: Box::new(body),
    }
}

/// Builds a grammar from a list of rules.
///
/// Equivalent to adding each rule to [`Grammar::builder`] in order.
pub fn rec(rules: impl IntoIterator<Item = RuleDef>) -> GrammarResult<Grammar> {
    rules
        .into_iter()
        .fold(Grammar::builder(), |builder, def| builder.push(def))
        .build()
}

#[derive(Debug)]
struct RuleArena {
    names: Vec<Arc<str>>,
    index: HashMap<Arc<str>, usize>,
    slots: Vec<OnceLock<Pattern>>,
}

impl RuleArena {
    fn slot(&self, name: &str) -> GrammarResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GrammarError::UndefinedRule {
                name: name.to_string(),
            })
    }
}

/// Access to sibling rules while a grammar is being built.
#[derive(Debug)]
pub struct Rules<'g> {
    arena: &'g Arc<RuleArena>,
}

impl Rules<'_> {
    /// A pattern that applies rule `name`.
    ///
    /// Fails if no rule with that name is defined.
    pub fn get(&self, name: &str) -> GrammarResult<Pattern> {
        let index = self.arena.slot(name)?;
        let arena = Arc::downgrade(self.arena);
        let name: Arc<str> = Arc::clone(&self.arena.names[index]);
        Ok(Pattern::new(move |ids, input| {
            let Some(arena) = Weak::upgrade(&arena) else {
                error!(rule = %name, "rule applied after its grammar was dropped");
                return None;
            };
            arena.slots[index].get()?.apply(ids, input)
        }))
    }

    /// Returns true if a rule with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.arena.index.contains_key(name)
    }
}

/// Collects rule definitions for a [`Grammar`].
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    rules: Vec<RuleDef>,
}

impl GrammarBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule. Its body runs when the grammar is built.
    pub fn rule<F>(self, name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: FnOnce(&Rules<'_>) -> GrammarResult<Pattern> + 'static,
    {
        self.push(rule(name, body))
    }

    fn push(mut self, def: RuleDef) -> Self {
        self.rules.push(def);
        self
    }

    /// Registers every rule, then builds every body.
    pub fn build(self) -> GrammarResult<Grammar> {
        let mut names = Vec::with_capacity(self.rules.len());
        let mut index = HashMap::with_capacity(self.rules.len());
        for def in &self.rules {
            if index.insert(Arc::clone(&def.name), names.len()).is_some() {
                return Err(GrammarError::DuplicateRule {
                    name: def.name.to_string(),
                });
            }
            names.push(Arc::clone(&def.name));
        }

        let slots = names.iter().map(|_| OnceLock::new()).collect();
        let arena = Arc::new(RuleArena {
            names,
            index,
            slots,
        });

        let rules = Rules { arena: &arena };
        for (slot, def) in self.rules.into_iter().enumerate() {
            let pattern = (def.body)(&rules)?;
            // every name is unique, so each slot is set exactly once
            let _ = arena.slots[slot].set(pattern);
            debug!(rule = %def.name, "grammar rule built");
        }

        debug!(rules = arena.names.len(), "grammar sealed");
        Ok(Grammar { arena })
    }
}

/// A sealed set of mutually recursive rules.
#[derive(Debug, Clone)]
pub struct Grammar {
    arena: Arc<RuleArena>,
}

impl Grammar {
    /// Start building a grammar.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// The pattern for rule `name`.
    ///
    /// The returned pattern keeps the grammar alive.
    pub fn get(&self, name: &str) -> GrammarResult<Pattern> {
        let index = self.arena.slot(name)?;
        let arena = Arc::clone(&self.arena);
        Ok(Pattern::new(move |ids, input| {
            arena.slots[index].get()?.apply(ids, input)
        }))
    }

    /// Returns true if a rule with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.arena.index.contains_key(name)
    }

    /// Rule names in definition order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.arena.names.iter().map(|name| &**name)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.arena.names.len()
    }

    /// Returns true if the grammar has no rules.
    pub fn is_empty(&self) -> bool {
        self.arena.names.is_empty()
    }
}
