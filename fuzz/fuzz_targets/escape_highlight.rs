// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for escape-then-highlight.
//!
//! Arbitrary text and an arbitrary term. Whatever the input, the highlighter
//! may only ever add its own tags: strip them and you must get the escaped
//! text back, byte for byte.

#![no_main]

use arbitrary::Arbitrary;
use glint::{escape_html, highlight, Term};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    term: String,
}

fuzz_target!(|input: Input| {
    let escaped = escape_html(&input.text);
    assert!(!escaped.contains('<'), "escaped text contains '<'");
    assert!(!escaped.contains('>'), "escaped text contains '>'");

    let Some(term) = Term::parse(&input.term) else {
        return;
    };

    let marked = highlight(&escaped, &term, "em");
    let stripped = marked.replace("<em>", "").replace("</em>", "");
    assert_eq!(stripped, escaped, "highlight changed more than its tags");

    if term.occurs_in(&input.text) {
        assert!(marked.contains("<em>"), "occurrence of {:?} not highlighted", term);
    }
});
