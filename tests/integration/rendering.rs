//! Rendered markup over the fixture site: escaping, dates, tags, defaults.

use crate::common::{assert_markup_safe, fixture_index, search_html};
use glint::EngineConfig;

#[test]
fn test_hostile_entry_is_inert() {
    let html = search_html(&fixture_index(), "script", &EngineConfig::default());

    assert_markup_safe(&html);
    assert!(html.contains("Notes on &lt;<em>script</em>&gt; Injection"));
    assert!(html.contains(r#"href="/posts/escaping/?a=1&amp;b=2""#));
    assert!(html.contains("Why we escape &quot;everything&quot; &amp; what it costs"));
    assert!(html.contains(r#"<span class="search-result-tag">&lt;web&gt;</span>"#));
}

#[test]
fn test_every_query_produces_safe_markup() {
    let index = fixture_index();
    let queries = [
        "a", "e", "rust", "<", ">", "&", "\"", "'", "amp", "lt", "quot", "039", "<b>", "o'reilly",
        "café", "script", "drafts", ".*", "(", "[", "\\",
    ];
    for config in [EngineConfig::modal(), EngineConfig::inline()] {
        for query in queries {
            assert_markup_safe(&search_html(&index, query, &config));
        }
    }
}

#[test]
fn test_term_with_markup_characters_highlights_escaped_text() {
    let html = search_html(&fixture_index(), "<b>markup</b>", &EngineConfig::default());
    assert_markup_safe(&html);
    assert!(html.contains("<em>&lt;b&gt;markup&lt;/b&gt;</em>"));
}

#[test]
fn test_dates_formatted_or_shown_raw() {
    let index = fixture_index();
    let config = EngineConfig::default();

    let html = search_html(&index, "tokenizer", &config);
    assert!(html.contains(r#"<div class="search-result-date">Dec 18, 2023</div>"#));

    let html = search_html(&index, "travel notes", &config);
    assert!(html.contains(r#"<div class="search-result-date">June 2022</div>"#));

    let html = search_html(&index, "untitled drafts", &config);
    assert!(!html.contains("search-result-date"));
}

#[test]
fn test_missing_title_and_url_defaults() {
    let html = search_html(&fixture_index(), "drafts", &EngineConfig::default());
    assert!(html.contains(r##"<a href="#" class="search-result-item">"##));
    assert!(html.contains(r#"<div class="search-result-title">Untitled</div>"#));
}

#[test]
fn test_tags_capped_at_three() {
    let html = search_html(&fixture_index(), "tokenizer", &EngineConfig::default());
    assert_eq!(html.matches(r#"class="search-result-tag""#).count(), 3);
    assert!(!html.contains(">lexing<"));
}

#[test]
fn test_case_insensitive_highlight_keeps_original_case() {
    let html = search_html(&fixture_index(), "café", &EngineConfig::inline());
    assert!(html.contains("<mark>Café</mark> Culture"));
    assert!(html.contains("<mark>CAFÉ</mark>"));
}

#[test]
fn test_substring_semantics_match_inside_words() {
    let index = fixture_index();
    // "trust" contains "rust"; the modal also searches tags.
    let modal = search_html(&index, "rust", &EngineConfig::modal());
    assert_eq!(modal.matches("search-result-item").count(), 3);
    assert!(modal.contains("t<em>rust</em>"));

    let inline = search_html(&index, "rust", &EngineConfig::inline());
    assert_eq!(inline.matches("search-result-item").count(), 2);
}

#[test]
fn test_no_results_message_escapes_term() {
    let html = search_html(&fixture_index(), "<zzz>", &EngineConfig::default());
    assert_eq!(
        html,
        r#"<div class="search-empty"><p>No results found for "&lt;zzz&gt;"</p></div>"#
    );
}

#[test]
fn test_empty_query_renders_nothing() {
    assert_eq!(search_html(&fixture_index(), "   ", &EngineConfig::default()), "");
}
