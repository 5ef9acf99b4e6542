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

//! Fuzz target for source view arithmetic.
//!
//! Derives views at arbitrary offsets and checks that every derived view
//! either errors or stays on character boundaries inside its parent.
//!
//! ```bash
//! cargo fuzz run fuzz_views
//! ```

use libfuzzer_sys::fuzz_target;
use strand_core::SourceView;

fuzz_target!(|input: (String, u16, u16)| {
    let (text, a, b) = input;
    let (a, b) = (usize::from(a), usize::from(b));
    let view = SourceView::new(&text);

    for derived in [view.take(a), view.skip(a), view.slice(a, b)].into_iter().flatten() {
        assert!(derived.start() >= view.start());
        assert!(derived.end() <= view.end());
        assert!(text.is_char_boundary(derived.start()));
        assert!(text.is_char_boundary(derived.end()));
        assert_eq!(derived.window().len(), derived.len());
    }
});
