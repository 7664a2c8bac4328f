// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! A site build emits `search.json`: a flat array of entries, one per page or
//! post. We don't control that file, so decoding is deliberately forgiving:
//! a field with the wrong JSON type reads as absent and picks up its display
//! default later, instead of failing the whole index.
//!
//! # Invariants
//!
//! - **SearchIndex**: immutable once built. Cloning shares the entries, so the
//!   loader, the controller and any timer task all see the same slice.
//! - **SearchEntry**: every string field is either `Some(non-string-checked)`
//!   or `None`; display accessors never return an empty title or url.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::IndexLoadError;

/// Shown when an entry has no usable title.
pub const UNTITLED: &str = "Untitled";

/// Link target when an entry has no usable url.
pub const FALLBACK_HREF: &str = "#";

// =============================================================================
// ENTRIES
// =============================================================================

/// One indexed page or post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
}

impl SearchEntry {
    /// Title for display, falling back to [`UNTITLED`] when absent or empty.
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNTITLED)
    }

    /// Link target, falling back to [`FALLBACK_HREF`].
    pub fn href(&self) -> &str {
        non_empty(&self.url).unwrap_or(FALLBACK_HREF)
    }

    /// Raw date string, if the entry has a non-empty one.
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    /// Text of a searchable field, `""` when absent.
    ///
    /// Tags are joined with a single space, so a multi-word term can span two
    /// adjacent tags. That matches how the page scripts always behaved.
    pub fn field_text(&self, field: SearchField) -> std::borrow::Cow<'_, str> {
        use std::borrow::Cow;
        match field {
            SearchField::Title => Cow::Borrowed(self.title.as_deref().unwrap_or("")),
            SearchField::Description => Cow::Borrowed(self.description.as_deref().unwrap_or("")),
            SearchField::Content => Cow::Borrowed(self.content.as_deref().unwrap_or("")),
            SearchField::Tags => Cow::Owned(self.tags.join(" ")),
        }
    }

    /// Text of an excerptable field, `""` when absent.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Description => self.description.as_deref().unwrap_or(""),
            TextField::Content => self.content.as_deref().unwrap_or(""),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Accept any JSON value; keep it only when it's a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Tags arrive as an array, occasionally as one bare string, sometimes with junk mixed in.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

// =============================================================================
// FIELDS
// =============================================================================

/// Fields the matcher can test a term against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Description,
    Content,
    Tags,
}

impl SearchField {
    /// Every field, in the order the modal widget has always checked them.
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Description,
        SearchField::Content,
        SearchField::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Description => "description",
            SearchField::Content => "content",
            SearchField::Tags => "tags",
        }
    }
}

/// Long-form fields an excerpt can be cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Description,
    Content,
}

// =============================================================================
// INDEX
// =============================================================================

/// The loaded search index: an ordered, immutable, shareable list of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Arc<[SearchEntry]>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Decode `search.json` bytes.
    ///
    /// The top level must be an array; individual entries are decoded leniently.
    pub fn from_json(bytes: &[u8]) -> Result<Self, IndexLoadError> {
        let entries: Vec<SearchEntry> =
            serde_json::from_slice(bytes).map_err(|e| IndexLoadError::Parse {
                reason: e.to_string(),
            })?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchEntry> {
        self.entries.iter()
    }

    /// Do two handles share the same underlying entries?
    pub fn ptr_eq(&self, other: &SearchIndex) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a SearchEntry;
    type IntoIter = std::slice::Iter<'a, SearchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
