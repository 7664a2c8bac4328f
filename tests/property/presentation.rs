//! Excerpt, highlight and escaping properties.

use glint::search::ELLIPSIS;
use glint::util::escape::ENTITIES;
use glint::{escape_html, escape_value, excerpt, highlight, ExcerptOptions, Term};
use proptest::prelude::*;
use serde_json::json;

/// Leftmost, non-overlapping occurrences of `needle` in `haystack` (both lowercase ASCII).
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let mut count = 0;
    let mut rest = haystack;
    while let Some(pos) = rest.find(needle) {
        count += 1;
        rest = &rest[pos + needle.len()..];
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ------------------------------------------------------------------------
    // EXCERPTS
    // ------------------------------------------------------------------------

    /// The window never exceeds `max_length` characters plus the two ellipses.
    #[test]
    fn prop_excerpt_bounded(
        text in "[a-zé ]{0,200}",
        raw_term in "[a-z]{1,4}",
        max_length in 10usize..80,
        lead_pct in 0usize..=100,
    ) {
        let options = ExcerptOptions { max_length, lead: max_length * lead_pct / 100 };
        let term = Term::parse(&raw_term).unwrap();
        let out = excerpt(&text, &term, options);
        prop_assert!(out.chars().count() <= max_length + 2 * ELLIPSIS.len());
    }

    /// A term absent from the text gives the head of the text: no leading
    /// ellipsis, a trailing one exactly when something was cut.
    #[test]
    fn prop_excerpt_without_match_is_prefix(
        text in "[a-m ]{1,200}",
        raw_term in "[n-z]{1,3}",
        max_length in 10usize..80,
    ) {
        let options = ExcerptOptions { max_length, lead: max_length / 3 };
        let term = Term::parse(&raw_term).unwrap();
        let out = excerpt(&text, &term, options);

        prop_assert!(!out.starts_with(ELLIPSIS));
        let body = out.strip_suffix(ELLIPSIS).unwrap_or(&out);
        prop_assert!(text.starts_with(body));
        prop_assert_eq!(out.ends_with(ELLIPSIS), text.chars().count() > max_length);
    }

    /// When the window has room for it, the excerpt shows the first match.
    #[test]
    fn prop_excerpt_contains_match(
        before in "[a-m ]{0,120}",
        after in "[a-m ]{0,120}",
        raw_term in "[n-z]{1,5}",
        max_length in 20usize..80,
        lead in 0usize..15,
    ) {
        let text = format!("{}{}{}", before, raw_term, after);
        let term = Term::parse(&raw_term).unwrap();
        let out = excerpt(&text, &term, ExcerptOptions { max_length, lead });

        prop_assert!(out.contains(&raw_term));
        prop_assert_eq!(out.starts_with(ELLIPSIS), before.chars().count() > lead);
    }

    // ------------------------------------------------------------------------
    // HIGHLIGHTING
    // ------------------------------------------------------------------------

    /// Stripping the emphasis tags gives back exactly the escaped input.
    #[test]
    fn prop_highlight_alters_nothing_else(
        text in "[abAB&<>\"' ]{0,40}",
        raw_term in "[ab&<']{1,3}",
    ) {
        let escaped = escape_html(&text);
        let term = Term::parse(&raw_term).unwrap();
        let out = highlight(&escaped, &term, "em");
        prop_assert_eq!(out.replace("<em>", "").replace("</em>", ""), escaped);
    }

    /// Every case-insensitive occurrence is wrapped exactly once.
    #[test]
    fn prop_highlight_wraps_every_occurrence(
        text in "[abAB&< ]{0,40}",
        raw_term in "[ab&<]{1,3}",
    ) {
        let term = Term::parse(&raw_term).unwrap();
        let out = highlight(&escape_html(&text), &term, "em");
        let expected = count_occurrences(&text.to_lowercase(), term.as_str());
        prop_assert_eq!(out.matches("<em>").count(), expected);
        prop_assert_eq!(out.matches("</em>").count(), expected);
    }

    // ------------------------------------------------------------------------
    // ESCAPING
    // ------------------------------------------------------------------------

    /// Escaped output has no raw markup characters and every `&` starts an entity.
    #[test]
    fn prop_escape_output_is_inert(text in any::<String>()) {
        let out = escape_html(&text);
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
        prop_assert!(!out.contains('"'));
        prop_assert!(!out.contains('\''));
        for (i, _) in out.match_indices('&') {
            let rest = &out[i..];
            prop_assert!(ENTITIES.iter().any(|(_, entity)| rest.starts_with(entity)));
        }
    }

    /// Text without special characters passes through untouched.
    #[test]
    fn prop_escape_identity_on_plain_text(text in "[a-zA-Z0-9 .,!?é]{0,60}") {
        prop_assert_eq!(escape_html(&text), text);
    }
}

#[test]
fn test_non_strings_escape_to_empty() {
    for value in [json!(null), json!(42), json!(1.5), json!(true), json!(["a"]), json!({"a": 1})] {
        assert_eq!(escape_value(&value), "");
    }
    assert_eq!(escape_value(&json!("<a>")), "&lt;a&gt;");
}
