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

//! A single error type for callers that build and parse in one go.

use strand_core::{GrammarError, ParseError};
use thiserror::Error;

/// Either a grammar or a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Building a pattern or grammar failed.
    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),

    /// Parsing the input failed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns true if this is a grammar construction error.
    pub fn is_grammar(&self) -> bool {
        matches!(self, Self::Grammar(_))
    }

    /// Returns true if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Result type for the facade's convenience functions.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grammar_error() {
        let err: Error = GrammarError::UndefinedRule {
            name: "x".to_string(),
        }
        .into();
        assert!(err.is_grammar());
        assert_eq!(err.to_string(), "grammar error: undefined rule 'x'");
    }

    #[test]
    fn test_from_parse_error() {
        let err: Error = ParseError::NoMatch.into();
        assert!(err.is_parse());
        assert!(!err.is_grammar());
        assert_eq!(err.to_string(), "parse error: input does not match");
    }
}
