// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! One engine serves both widgets; what differs between them is all here.
//! The struct deserializes with camelCase keys and per-field defaults, so a
//! JavaScript options object or a JSON config file only needs to mention what
//! it changes:
//!
//! ```json
//! { "maxResults": 8, "debounceMs": 300, "highlightTag": "mark" }
//! ```
//!
//! | Setting        | Modal (default) | Inline                |
//! |----------------|-----------------|-----------------------|
//! | fields         | all four        | title, content        |
//! | maxResults     | 10              | 8                     |
//! | debounceMs     | 200             | 300                   |
//! | excerpt        | 120 / lead 40   | 100 / lead 20         |
//! | excerptFrom    | description, content | content          |
//! | highlightTag   | `em`            | `mark`                |

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::search::ExcerptOptions;
use crate::types::{SearchField, TextField};

/// Where the site build puts the index.
pub const DEFAULT_INDEX_PATH: &str = "/search.json";

/// Default result cap.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Tags shown per result.
pub const DEFAULT_MAX_TAGS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Site-relative path of the JSON index.
    pub index_path: String,
    /// Fields a term is matched against.
    pub fields: Vec<SearchField>,
    /// Result cap.
    pub max_results: usize,
    /// Quiet period after the last keystroke before matching.
    pub debounce_ms: u64,
    /// Excerpt window.
    pub excerpt: ExcerptOptions,
    /// Fields an excerpt may be cut from, in preference order.
    pub excerpt_from: Vec<TextField>,
    /// Element wrapped around highlighted matches.
    pub highlight_tag: String,
    /// Prefix for every CSS class in rendered markup.
    pub class_prefix: String,
    /// Tag badges shown per result.
    pub max_tags: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            index_path: DEFAULT_INDEX_PATH.to_string(),
            fields: SearchField::ALL.to_vec(),
            max_results: DEFAULT_MAX_RESULTS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            excerpt: ExcerptOptions::default(),
            excerpt_from: vec![TextField::Description, TextField::Content],
            highlight_tag: "em".to_string(),
            class_prefix: "search".to_string(),
            max_tags: DEFAULT_MAX_TAGS,
        }
    }
}

impl EngineConfig {
    /// The overlay opened from the header (same as `default()`).
    pub fn modal() -> Self {
        Self::default()
    }

    /// The search box embedded in a page.
    pub fn inline() -> Self {
        Self {
            fields: vec![SearchField::Title, SearchField::Content],
            max_results: 8,
            debounce_ms: 300,
            excerpt: ExcerptOptions {
                max_length: 100,
                lead: 20,
            },
            excerpt_from: vec![TextField::Content],
            highlight_tag: "mark".to_string(),
            ..Self::default()
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parse a JSON config (missing keys take their defaults), then validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Reject settings that would produce broken or unsafe markup.
    ///
    /// The highlight tag and class prefix are written into markup unescaped,
    /// so they're restricted to identifier characters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tag_ok = !self.highlight_tag.is_empty()
            && self.highlight_tag.chars().all(|c| c.is_ascii_alphanumeric());
        if !tag_ok {
            return Err(ConfigError::HighlightTag(self.highlight_tag.clone()));
        }

        let prefix_ok = self
            .class_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !prefix_ok {
            return Err(ConfigError::ClassPrefix(self.class_prefix.clone()));
        }

        if self.max_results == 0 {
            return Err(ConfigError::ZeroResults);
        }

        if self.excerpt.lead > self.excerpt.max_length {
            return Err(ConfigError::ExcerptLead {
                lead: self.excerpt.lead,
                max_length: self.excerpt.max_length,
            });
        }

        if self.fields.is_empty() {
            return Err(ConfigError::NoFields);
        }

        Ok(())
    }
}

/// The two widget flavors, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Modal,
    Inline,
}

impl Variant {
    pub fn config(self) -> EngineConfig {
        match self {
            Variant::Modal => EngineConfig::modal(),
            Variant::Inline => EngineConfig::inline(),
        }
    }
}
