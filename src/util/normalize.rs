// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding for search.
//!
//! Folding is per character and never changes the character count, so an
//! offset found in folded text is valid in the original text too. Excerpts
//! and highlighting depend on that: they locate a match in the folded copy
//! and slice the original.
//!
//! The handful of characters whose lowercase form is more than one character
//! (e.g. 'İ') are left as-is rather than expanded.

/// Lowercase a single character, keeping it unchanged when lowercasing would
/// produce more than one character.
#[inline]
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold a whole string. `fold(s).chars().count() == s.chars().count()`.
pub fn fold(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Normalize raw input into a search term: trim surrounding whitespace, fold case.
pub fn normalize(value: &str) -> String {
    fold(value.trim())
}

/// Char offset of the first occurrence of an already-folded `needle` in `haystack`.
pub fn find_folded(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let folded = fold(haystack);
    folded
        .find(needle)
        .map(|byte| folded[..byte].chars().count())
}
