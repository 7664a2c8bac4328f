// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Both enums carry owned strings rather than source errors so they can be
//! cloned into the shared load state and compared in tests.

use thiserror::Error;

/// Why the search index could not be loaded.
///
/// Never fatal: the widget shows its error placeholder and the next focus or
/// open event retries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IndexLoadError {
    /// The request never produced a response (DNS, connection, TLS, ...).
    #[error("could not fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    /// The server answered with a non-success status.
    #[error("fetching {location} returned HTTP {status}")]
    Status { location: String, status: u16 },

    /// A local index file could not be read.
    #[error("could not read {location}: {reason}")]
    Io { location: String, reason: String },

    /// The body was not a JSON array of entries.
    #[error("search index is not valid JSON: {reason}")]
    Parse { reason: String },
}

/// Invalid engine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("highlight tag {0:?} must be a non-empty ASCII alphanumeric element name")]
    HighlightTag(String),

    #[error("class prefix {0:?} may only contain ASCII letters, digits, '-' and '_'")]
    ClassPrefix(String),

    #[error("maxResults must be at least 1")]
    ZeroResults,

    #[error("excerpt lead ({lead}) cannot exceed excerpt maxLength ({max_length})")]
    ExcerptLead { lead: usize, max_length: usize },

    #[error("at least one search field is required")]
    NoFields,

    #[error("could not read config {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("invalid config JSON: {0}")]
    Parse(String),
}
