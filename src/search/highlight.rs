// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term highlighting on already-escaped text.
//!
//! Input is the output of [`escape_html`](crate::util::escape::escape_html).
//! We walk it as a sequence of *units*: either a plain character or one of
//! the five entities the escaper emits, read back as the character it
//! encodes. Matching happens on units, so:
//!
//! - a term containing `&` or `<` still matches the escaped `&amp;` / `&lt;`;
//! - a term like `amp` or `lt` never matches inside an entity and splits it;
//! - the term is compared literally; regex metacharacters mean nothing here.
//!
//! Matches are leftmost, non-overlapping, case-insensitive, and keep the
//! original casing inside the tag.

use super::Term;
use crate::util::escape::decode_entity_at;
use crate::util::normalize::fold_char;

/// One visible character of escaped text: folded char plus its byte span.
struct Unit {
    folded: char,
    start: usize,
    end: usize,
}

fn units(escaped: &str) -> Vec<Unit> {
    let mut units = Vec::with_capacity(escaped.len());
    let mut pos = 0;
    while pos < escaped.len() {
        if let Some((raw, len)) = decode_entity_at(escaped, pos) {
            units.push(Unit {
                folded: fold_char(raw),
                start: pos,
                end: pos + len,
            });
            pos += len;
            continue;
        }
        let Some(c) = escaped[pos..].chars().next() else {
            break;
        };
        units.push(Unit {
            folded: fold_char(c),
            start: pos,
            end: pos + c.len_utf8(),
        });
        pos += c.len_utf8();
    }
    units
}

/// Wrap every occurrence of `term` in `<tag>...</tag>`.
///
/// `tag` is written verbatim; [`EngineConfig::validate`](crate::EngineConfig::validate)
/// restricts it to a plain element name.
pub fn highlight(escaped: &str, term: &Term, tag: &str) -> String {
    let needle: Vec<char> = term.as_str().chars().collect();
    let units = units(escaped);
    let mut out = String::with_capacity(escaped.len() + 16);

    let mut i = 0;
    while i < units.len() {
        let window = units.get(i..i + needle.len());
        let hit = window.is_some_and(|w| w.iter().zip(&needle).all(|(u, c)| u.folded == *c));
        if hit {
            let start = units[i].start;
            let end = units[i + needle.len() - 1].end;
            out.push('<');
            out.push_str(tag);
            out.push('>');
            out.push_str(&escaped[start..end]);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
            i += needle.len();
        } else {
            out.push_str(&escaped[units[i].start..units[i].end]);
            i += 1;
        }
    }
    out
}
