// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching: where the rubber meets the road.
//!
//! There is no ranking here on purpose. An entry matches when any configured
//! field contains the term, case-insensitively, and results keep the order of
//! the index (which the site build writes newest first). The result list is
//! the first `max_results` matches, nothing more clever.
//!
//! The two presentation helpers that also need to find the term live in
//! submodules: [`excerpt`] cuts a window around the first match, [`highlight`]
//! wraps every match in the emphasis tag.

pub mod excerpt;
pub mod highlight;

pub use excerpt::{excerpt, ExcerptOptions, ELLIPSIS};
pub use highlight::highlight;

use crate::types::{SearchEntry, SearchField, SearchIndex};
use crate::util::normalize::{find_folded, fold, normalize};
use std::fmt;

/// A normalized, non-empty search term.
///
/// Trimmed and case-folded. There's no way to build an empty one, which is how
/// "empty input clears the results" is enforced: the caller gets `None` from
/// [`Term::parse`] and has nothing to hand to the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    /// Normalize raw input. `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Term(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Case-insensitive containment.
    pub fn occurs_in(&self, text: &str) -> bool {
        !text.is_empty() && fold(text).contains(&self.0)
    }

    /// Char offset of the first case-insensitive occurrence in `text`.
    pub fn find_in(&self, text: &str) -> Option<usize> {
        find_folded(text, &self.0)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Does any of `fields` contain the term?
pub fn entry_matches(entry: &SearchEntry, term: &Term, fields: &[SearchField]) -> bool {
    fields
        .iter()
        .any(|field| term.occurs_in(&entry.field_text(*field)))
}

/// Stable filter over the index, truncated to `max_results`.
pub fn match_entries<'a>(
    index: &'a SearchIndex,
    term: &Term,
    fields: &[SearchField],
    max_results: usize,
) -> Vec<&'a SearchEntry> {
    index
        .iter()
        .filter(|entry| entry_matches(entry, term, fields))
        .take(max_results)
        .collect()
}
