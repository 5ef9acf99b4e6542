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

#![no_main]

//! Fuzz target running every fixture grammar over arbitrary text.
//!
//! Checks that matching never panics and that every successful parse keeps
//! the match contract.
//!
//! # Running the Fuzzer
//!
//! ```bash
//! # from the strand-core directory
//! cargo fuzz run fuzz_grammars
//!
//! # limit input size, since deeply nested input recurses
//! cargo fuzz run fuzz_grammars -- -max_len=4096
//! ```

use libfuzzer_sys::fuzz_target;
use strand_core::{parse_with_options, ParseOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let options = ParseOptions::builder()
        .max_input_size(4096)
        .require_full_match(false)
        .build();

    for fixture in strand_test::fixtures() {
        let Ok(pattern) = (fixture.pattern)() else {
            continue;
        };
        if let Ok(out) = parse_with_options(&pattern, text, &options) {
            assert_eq!(out.tree.len(), out.consumed);
            assert_eq!(out.rest.start(), out.consumed);
            let projected = out.tree.project_to_named();
            assert_eq!(projected.project_to_named(), projected);
        }
    }
});
