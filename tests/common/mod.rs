//! Shared test utilities and fixtures.

#![allow(dead_code)]

use glint::{match_entries, EngineConfig, Renderer, SearchIndex, Term};
use std::fs;

// Re-export canonical test utilities from glint::testing
pub use glint::testing::{
    hello_world_entry, make_entry, sample_index, FlakySource, MemoryInput, RecordingChrome,
    RecordingSink, SinkEvent, SlowSource, SAMPLE_JSON,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// A built site: `fixtures/site/search.json`.
pub const SITE_DIR: &str = "fixtures/site";

/// The index file inside [`SITE_DIR`].
pub const SITE_INDEX: &str = "fixtures/site/search.json";

pub fn fixture_json() -> String {
    fs::read_to_string(SITE_INDEX).expect("fixture index should exist")
}

pub fn fixture_index() -> SearchIndex {
    SearchIndex::from_json(fixture_json().as_bytes()).expect("fixture index should decode")
}

// ============================================================================
// HELPERS
// ============================================================================

/// Match and render in one step, the way a fired ticket does.
pub fn search_html(index: &SearchIndex, query: &str, config: &EngineConfig) -> String {
    let Some(term) = Term::parse(query) else {
        return String::new();
    };
    let results = match_entries(index, &term, &config.fields, config.max_results);
    Renderer::new(config).render(&results, &term)
}

/// Elements the renderer is allowed to emit.
const ALLOWED_TAGS: &[&str] = &[
    "a href=", "/a", "div class=", "/div", "span class=", "/span", "p", "/p", "em", "/em",
    "mark", "/mark",
];

/// Every `<...>` in `html` must be one of the renderer's own elements.
/// Anything else means index data leaked into markup unescaped.
pub fn assert_markup_safe(html: &str) {
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        assert!(!rest[..open].contains('>'), "stray '>' in {:?}", html);
        let after = &rest[open + 1..];
        let close = after
            .find('>')
            .unwrap_or_else(|| panic!("unterminated tag in {:?}", html));
        let tag = &after[..close];
        let allowed = ALLOWED_TAGS
            .iter()
            .any(|t| tag == *t || (t.ends_with('=') && tag.starts_with(t)));
        assert!(allowed, "unexpected element <{}> in {:?}", tag, html);
        assert!(!tag.contains('<'), "nested '<' inside <{}>", tag);
        rest = &after[close + 1..];
    }
    assert!(!rest.contains('>'), "stray '>' in {:?}", html);
}
