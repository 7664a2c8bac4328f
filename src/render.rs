// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result markup.
//!
//! Every value that came out of `search.json` is escaped before it touches
//! markup, and highlighting only ever runs on escaped text. There is no code
//! path that writes index data unescaped.
//!
//! ```text
//! <a href="/a" class="search-result-item">
//!   <div class="search-result-date">Jan 2, 2024</div>
//!   <div class="search-result-title">Hello <em>World</em></div>
//!   <div class="search-result-excerpt">A gentle intro...</div>
//!   <div class="search-result-tags"><span class="search-result-tag">intro</span></div>
//! </a>
//! ```
//!
//! Output is emitted without the whitespace shown above.

use crate::config::EngineConfig;
use crate::search::{excerpt, highlight, ExcerptOptions, Term};
use crate::types::{SearchEntry, TextField};
use crate::util::date::format_date;
use crate::util::escape::escape_html;

pub const NO_RESULTS_MESSAGE: &str = "No results found for";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load search index";
pub const LOADING_MESSAGE: &str = "Loading search index...";

/// Turns matches into markup according to an [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct Renderer {
    prefix: String,
    tag: String,
    excerpt: ExcerptOptions,
    excerpt_from: Vec<TextField>,
    max_tags: usize,
}

impl Renderer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            prefix: config.class_prefix.clone(),
            tag: config.highlight_tag.clone(),
            excerpt: config.excerpt,
            excerpt_from: config.excerpt_from.clone(),
            max_tags: config.max_tags,
        }
    }

    /// Render a result list, or the "no results" state when it's empty.
    pub fn render(&self, results: &[&SearchEntry], term: &Term) -> String {
        if results.is_empty() {
            return self.render_empty(term);
        }
        results
            .iter()
            .map(|entry| self.render_entry(entry, term))
            .collect()
    }

    /// One result card.
    pub fn render_entry(&self, entry: &SearchEntry, term: &Term) -> String {
        let p = &self.prefix;
        let mut out = format!(
            r#"<a href="{}" class="{p}-result-item">"#,
            escape_html(entry.href())
        );

        if let Some(date) = entry.date() {
            out.push_str(&format!(
                r#"<div class="{p}-result-date">{}</div>"#,
                escape_html(&format_date(date))
            ));
        }

        out.push_str(&format!(
            r#"<div class="{p}-result-title">{}</div>"#,
            self.highlight(entry.display_title(), term)
        ));

        let excerpt = self.excerpt_for(entry, term);
        if !excerpt.is_empty() {
            out.push_str(&format!(
                r#"<div class="{p}-result-excerpt">{}</div>"#,
                self.highlight(&excerpt, term)
            ));
        }

        if !entry.tags.is_empty() && self.max_tags > 0 {
            out.push_str(&format!(r#"<div class="{p}-result-tags">"#));
            for tag in entry.tags.iter().take(self.max_tags) {
                out.push_str(&format!(
                    r#"<span class="{p}-result-tag">{}</span>"#,
                    escape_html(tag)
                ));
            }
            out.push_str("</div>");
        }

        out.push_str("</a>");
        out
    }

    /// Plain-text excerpt for an entry (not yet escaped).
    ///
    /// Prefers the first configured field that actually contains the term;
    /// otherwise the first non-empty one, truncated from the start.
    pub fn excerpt_for(&self, entry: &SearchEntry, term: &Term) -> String {
        let source = self
            .excerpt_from
            .iter()
            .map(|field| entry.text(*field))
            .find(|text| term.occurs_in(text))
            .or_else(|| {
                self.excerpt_from
                    .iter()
                    .map(|field| entry.text(*field))
                    .find(|text| !text.is_empty())
            });
        match source {
            Some(text) => excerpt(text, term, self.excerpt),
            None => String::new(),
        }
    }

    pub fn render_empty(&self, term: &Term) -> String {
        format!(
            r#"<div class="{p}-empty"><p>{NO_RESULTS_MESSAGE} "{}"</p></div>"#,
            escape_html(term.as_str()),
            p = self.prefix
        )
    }

    pub fn render_error(&self) -> String {
        format!(
            r#"<div class="{p}-empty {p}-error"><p>{LOAD_ERROR_MESSAGE}</p></div>"#,
            p = self.prefix
        )
    }

    pub fn render_loading(&self) -> String {
        format!(
            r#"<div class="{p}-empty {p}-loading"><p>{LOADING_MESSAGE}</p></div>"#,
            p = self.prefix
        )
    }

    fn highlight(&self, raw: &str, term: &Term) -> String {
        highlight(&escape_html(raw), term, &self.tag)
    }
}
