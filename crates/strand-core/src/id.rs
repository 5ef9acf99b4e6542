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

//! Per-session tree node identifiers.
//!
//! Node ids exist for diagram and debug stability only and never carry
//! meaning. Each parse session owns one [`IdAllocator`] and passes it into
//! every pattern invocation, so parses running on different threads never
//! share a counter.

use std::cell::Cell;
use std::fmt;

/// Identifier of a tree node, unique within one parse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeId(u64);

impl NodeId {
    /// The raw numeric value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source for one parse session.
///
/// Ids are handed out in creation order starting at 1. The allocator is
/// `!Sync`; concurrent parses each create their own.
#[derive(Debug)]
pub struct IdAllocator {
    next: Cell<u64>,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an allocator whose first id is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first),
        }
    }

    /// Returns a fresh id.
    #[inline]
    pub fn allocate(&self) -> NodeId {
        let id = self.next.get();
        self.next.set(id + 1);
        NodeId(id)
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    #[inline]
    pub fn peek(&self) -> NodeId {
        NodeId(self.next.get())
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let ids = IdAllocator::new();
        assert_eq!(ids.allocate().get(), 1);
        assert_eq!(ids.allocate().get(), 2);
    }

    #[test]
    fn test_monotonic() {
        let ids = IdAllocator::default();
        let a = ids.allocate();
        let b = ids.allocate();
        let c = ids.allocate();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_starting_at() {
        let ids = IdAllocator::starting_at(100);
        assert_eq!(ids.peek().get(), 100);
        assert_eq!(ids.allocate().get(), 100);
        assert_eq!(ids.peek().get(), 101);
    }

    #[test]
    fn test_sessions_are_independent() {
        let first = IdAllocator::new();
        let second = IdAllocator::new();
        first.allocate();
        first.allocate();
        assert_eq!(second.allocate().get(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(IdAllocator::starting_at(7).allocate().to_string(), "#7");
    }
}
