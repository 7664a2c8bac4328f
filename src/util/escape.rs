// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML escaping.
//!
//! Every string that comes out of `search.json` goes through [`escape_html`]
//! before it's concatenated into markup. The highlighter then works on the
//! escaped text, so it needs to read the entities back as single characters;
//! [`decode_entity_at`] is the inverse for exactly the five entities we emit.

use serde_json::Value;

/// Characters we escape, with their replacements.
pub const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#039;"),
];

/// Escape `& < > " '`.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len() + unsafe_text.len() / 8);
    for c in unsafe_text.chars() {
        match ENTITIES.iter().find(|(raw, _)| *raw == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Escape an arbitrary JSON value. Anything that isn't a string escapes to `""`.
pub fn escape_value(value: &Value) -> String {
    match value {
        Value::String(s) => escape_html(s),
        _ => String::new(),
    }
}

/// If `escaped[at..]` starts with one of our entities, return the character it
/// encodes and the entity's byte length.
pub(crate) fn decode_entity_at(escaped: &str, at: usize) -> Option<(char, usize)> {
    let rest = escaped.get(at..)?;
    if !rest.starts_with('&') {
        return None;
    }
    ENTITIES
        .iter()
        .find(|(_, entity)| rest.starts_with(entity))
        .map(|(raw, entity)| (*raw, entity.len()))
}
