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

//! Ready-made character classes.
//!
//! Everything here is built from the primitives and structural combinators,
//! with bounds fixed at compile time.

use super::primitive::{
    char_one_of, char_one_of_repeat0, char_one_of_repeat1, range_run_unchecked, range_unchecked,
};
use super::structural::either;
use crate::pattern::Pattern;

/// One ASCII decimal digit.
pub fn digit() -> Pattern {
    range_unchecked('0', '9')
}

/// Zero or more decimal digits.
pub fn digits0() -> Pattern {
    range_run_unchecked('0', '9', false)
}

/// One or more decimal digits.
pub fn digits1() -> Pattern {
    range_run_unchecked('0', '9', true)
}

/// `0` or `1`.
pub fn digit_bin() -> Pattern {
    char_one_of("01")
}

/// One octal digit.
pub fn digit_oct() -> Pattern {
    range_unchecked('0', '7')
}

/// One hexadecimal digit in either case.
pub fn digit_hex() -> Pattern {
    char_one_of("0123456789abcdefABCDEF")
}

/// One hexadecimal digit, lowercase letters only.
pub fn digit_hex_lower() -> Pattern {
    char_one_of("0123456789abcdef")
}

/// One hexadecimal digit, uppercase letters only.
pub fn digit_hex_upper() -> Pattern {
    char_one_of("0123456789ABCDEF")
}

/// `a` to `z`.
pub fn latin_lower() -> Pattern {
    range_unchecked('a', 'z')
}

/// `A` to `Z`.
pub fn latin_upper() -> Pattern {
    range_unchecked('A', 'Z')
}

/// A Latin letter in either case.
pub fn latin() -> Pattern {
    either(latin_lower(), latin_upper())
}

/// A line break, `\n` or `\r\n`.
pub fn crlf() -> Pattern {
    either("\n", "\r\n")
}

/// Zero or more spaces, tabs and newlines.
pub fn space_tab_lf0() -> Pattern {
    char_one_of_repeat0(" \t\n")
}

/// One or more spaces, tabs and newlines.
pub fn space_tab_lf1() -> Pattern {
    char_one_of_repeat1(" \t\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(p: &Pattern, text: &str) -> bool {
        p.apply_str(text).is_some_and(|m| m.rest.is_empty())
    }

    #[test]
    fn test_digits() {
        assert!(accepts(&digit(), "5"));
        assert!(!accepts(&digit(), "a"));
        assert_eq!(digits0().apply_str("x").unwrap().consumed, 0);
        assert_eq!(digits1().apply_str("2024-").unwrap().consumed, 4);
        assert!(digits1().apply_str("-").is_none());
    }

    #[test]
    fn test_radix_digits() {
        assert!(accepts(&digit_bin(), "1"));
        assert!(!accepts(&digit_bin(), "2"));
        assert!(accepts(&digit_oct(), "7"));
        assert!(!accepts(&digit_oct(), "8"));
        assert!(accepts(&digit_hex(), "F"));
        assert!(accepts(&digit_hex(), "a"));
        assert!(!accepts(&digit_hex(), "g"));
        assert!(accepts(&digit_hex_lower(), "c"));
        assert!(!accepts(&digit_hex_lower(), "C"));
        assert!(accepts(&digit_hex_upper(), "C"));
        assert!(!accepts(&digit_hex_upper(), "c"));
    }

    #[test]
    fn test_latin() {
        assert!(accepts(&latin_lower(), "q"));
        assert!(!accepts(&latin_lower(), "Q"));
        assert!(accepts(&latin_upper(), "Q"));
        assert!(accepts(&latin(), "q"));
        assert!(accepts(&latin(), "Q"));
        assert!(!accepts(&latin(), "é"));
    }

    #[test]
    fn test_crlf() {
        assert_eq!(crlf().apply_str("\nx").unwrap().consumed, 1);
        assert_eq!(crlf().apply_str("\r\nx").unwrap().consumed, 2);
        assert!(crlf().apply_str("\r").is_none());
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(space_tab_lf0().apply_str(" \t\n x").unwrap().consumed, 4);
        assert_eq!(space_tab_lf0().apply_str("x").unwrap().consumed, 0);
        assert!(space_tab_lf1().apply_str("x").is_none());
        assert_eq!(space_tab_lf0().apply_str("\r").unwrap().consumed, 0);
    }
}
