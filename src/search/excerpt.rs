// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpts: a bounded window of text around the first match.
//!
//! ```text
//!            lead            max_length - lead
//!   ... ◀──────────▶ match ◀────────────────────▶ ...
//! ```
//!
//! The window starts `lead` characters before the match and spans at most
//! `max_length` characters. Ellipses mark whichever ends were cut. When the
//! term isn't in this text at all (it matched the title, say), the excerpt
//! is simply the first `max_length` characters.
//!
//! All lengths count characters, not bytes, so multi-byte text never gets
//! sliced mid-character.

use serde::{Deserialize, Serialize};

use super::Term;

/// Marker for text cut off at either end of an excerpt.
pub const ELLIPSIS: &str = "...";

/// Excerpt window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExcerptOptions {
    /// Maximum characters of source text in the window.
    pub max_length: usize,
    /// Characters of context before the match. Must not exceed `max_length`.
    pub lead: usize,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            max_length: 120,
            lead: 40,
        }
    }
}

/// Cut an excerpt of `text` around the first occurrence of `term`.
pub fn excerpt(text: &str, term: &Term, options: ExcerptOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let ExcerptOptions { max_length, lead } = options;

    let Some(index) = term.find_in(text) else {
        let mut out: String = chars.iter().take(max_length).collect();
        if len > max_length {
            out.push_str(ELLIPSIS);
        }
        return out;
    };

    let start = index.saturating_sub(lead);
    let end = (index + max_length).saturating_sub(lead).min(len).max(start);

    let mut out = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.extend(&chars[start..end]);
    if end < len {
        out.push_str(ELLIPSIS);
    }
    out
}
