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

//! Error types for grammar construction and parsing.
//!
//! Matching itself never errors: a pattern that does not apply returns
//! `None`. Errors arise at the two edges around matching. A
//! [`GrammarError`] is raised while a grammar is being built (bad arguments,
//! unresolvable rule references); a [`ParseError`] is raised by the parse
//! entry points when the overall match is missing, incomplete, or refused
//! by a limit.

use thiserror::Error;

/// An error raised while building patterns or grammars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A character range whose lower bound is above its upper bound.
    #[error("inverted character range '{from}'..='{to}'")]
    InvertedRange {
        /// Lower bound as written.
        from: char,
        /// Upper bound as written.
        to: char,
    },

    /// A regex pattern that is not anchored with a leading `^`.
    #[error("regex '{pattern}' must start with '^'")]
    UnanchoredRegex {
        /// The offending pattern.
        pattern: String,
    },

    /// A regex pattern that failed to compile.
    #[error("invalid regex '{pattern}': {message}")]
    InvalidRegex {
        /// The offending pattern.
        pattern: String,
        /// Compiler diagnostic.
        message: String,
    },

    /// A rule body referenced a name no rule defines.
    #[error("undefined rule '{name}'")]
    UndefinedRule {
        /// The missing rule name.
        name: String,
    },

    /// Two rules were defined with the same name.
    #[error("rule '{name}' is defined more than once")]
    DuplicateRule {
        /// The repeated rule name.
        name: String,
    },
}

/// An error raised by [`parse`](crate::parse) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The pattern did not match at the start of the input.
    #[error("input does not match")]
    NoMatch,

    /// The pattern matched a prefix but full consumption was required.
    #[error("parse stopped at byte {consumed} with {remaining} bytes left")]
    Incomplete {
        /// Bytes consumed by the match.
        consumed: usize,
        /// Bytes left over.
        remaining: usize,
    },

    /// The input exceeded the configured size limit.
    #[error("input of {size} bytes exceeds limit of {max} bytes")]
    InputTooLarge {
        /// Actual input size.
        size: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl ParseError {
    /// Returns true if the input did not match at all.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    /// Returns true if a configured limit refused the input.
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, Self::InputTooLarge { .. })
    }
}

/// Result type for grammar construction.
pub type GrammarResult<T> = Result<T, GrammarError>;

/// Result type for parse entry points.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== GrammarError Display tests ====================

    #[test]
    fn test_inverted_range_display() {
        let err = GrammarError::InvertedRange { from: 'z', to: 'a' };
        assert_eq!(err.to_string(), "inverted character range 'z'..='a'");
    }

    #[test]
    fn test_regex_errors_display() {
        let err = GrammarError::UnanchoredRegex {
            pattern: "[0-9]+".to_string(),
        };
        assert!(err.to_string().contains("[0-9]+"));
        assert!(err.to_string().contains("'^'"));

        let err = GrammarError::InvalidRegex {
            pattern: "^(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert!(err.to_string().contains("unclosed group"));
    }

    #[test]
    fn test_rule_errors_display() {
        let err = GrammarError::UndefinedRule {
            name: "expr".to_string(),
        };
        assert_eq!(err.to_string(), "undefined rule 'expr'");
        let err = GrammarError::DuplicateRule {
            name: "expr".to_string(),
        };
        assert!(err.to_string().contains("more than once"));
    }

    // ==================== ParseError tests ====================

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::NoMatch.to_string(), "input does not match");
        let err = ParseError::Incomplete {
            consumed: 3,
            remaining: 2,
        };
        assert_eq!(err.to_string(), "parse stopped at byte 3 with 2 bytes left");
        let err = ParseError::InputTooLarge { size: 10, max: 5 };
        assert!(err.to_string().contains("10 bytes"));
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(ParseError::NoMatch.is_no_match());
        assert!(!ParseError::NoMatch.is_resource_limit());
        assert!(ParseError::InputTooLarge { size: 2, max: 1 }.is_resource_limit());
        let incomplete = ParseError::Incomplete {
            consumed: 0,
            remaining: 1,
        };
        assert!(!incomplete.is_no_match());
        assert!(!incomplete.is_resource_limit());
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<GrammarError>();
        assert_error::<ParseError>();
    }
}
