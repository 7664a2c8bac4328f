//! Matcher properties: soundness, completeness, ordering and the result cap.

use glint::{match_entries, SearchEntry, SearchField, SearchIndex, Term};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short text over a tiny alphabet so that random terms actually match.
fn text_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[abcABC ]{0,16}").unwrap())
}

fn entry_strategy() -> impl Strategy<Value = SearchEntry> {
    (
        text_strategy(),
        text_strategy(),
        text_strategy(),
        prop::collection::vec(prop::string::string_regex("[abcAB]{1,4}").unwrap(), 0..4),
    )
        .prop_map(|(title, description, content, tags)| SearchEntry {
            title,
            description,
            content,
            url: Some("/post".to_string()),
            date: None,
            tags,
        })
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcAB]{1,3}").unwrap()
}

fn fields_strategy() -> impl Strategy<Value = Vec<SearchField>> {
    prop::sample::subsequence(SearchField::ALL.to_vec(), 1..=4)
}

/// Reference implementation: plain lowercase containment.
fn oracle_matches(entry: &SearchEntry, term: &str, fields: &[SearchField]) -> bool {
    let term = term.to_lowercase();
    fields.iter().any(|field| {
        let text = match field {
            SearchField::Title => entry.title.clone().unwrap_or_default(),
            SearchField::Description => entry.description.clone().unwrap_or_default(),
            SearchField::Content => entry.content.clone().unwrap_or_default(),
            SearchField::Tags => entry.tags.join(" "),
        };
        text.to_lowercase().contains(&term)
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Results are exactly the first `max_results` oracle matches, in index order.
    #[test]
    fn prop_results_are_capped_prefix_of_matches(
        entries in prop::collection::vec(entry_strategy(), 0..24),
        raw_term in term_strategy(),
        fields in fields_strategy(),
        max_results in 1usize..12,
    ) {
        let index = SearchIndex::new(entries.clone());
        let term = Term::parse(&raw_term).unwrap();

        let expected: Vec<&SearchEntry> = entries
            .iter()
            .filter(|e| oracle_matches(e, &raw_term, &fields))
            .take(max_results)
            .collect();
        let actual = match_entries(&index, &term, &fields, max_results);

        prop_assert!(actual.len() <= max_results);
        prop_assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(&expected) {
            prop_assert_eq!(*a, *e);
        }
    }

    /// Every returned entry contains the term in at least one searched field.
    #[test]
    fn prop_every_result_matches(
        entries in prop::collection::vec(entry_strategy(), 0..24),
        raw_term in term_strategy(),
        fields in fields_strategy(),
    ) {
        let index = SearchIndex::new(entries);
        let term = Term::parse(&raw_term).unwrap();
        for entry in match_entries(&index, &term, &fields, usize::MAX) {
            prop_assert!(oracle_matches(entry, &raw_term, &fields));
        }
    }

    /// Case and surrounding whitespace in the input never change the results.
    #[test]
    fn prop_term_normalization(
        entries in prop::collection::vec(entry_strategy(), 0..16),
        raw_term in term_strategy(),
        pad in "[ \t]{0,3}",
    ) {
        let index = SearchIndex::new(entries);
        let lower = Term::parse(&raw_term.to_lowercase()).unwrap();
        let noisy = Term::parse(&format!("{}{}{}", pad, raw_term.to_uppercase(), pad)).unwrap();
        prop_assert_eq!(&lower, &noisy);
        prop_assert_eq!(
            match_entries(&index, &lower, &SearchField::ALL, 10).len(),
            match_entries(&index, &noisy, &SearchField::ALL, 10).len()
        );
    }

    /// Whitespace-only input never becomes a term.
    #[test]
    fn prop_blank_input_has_no_term(raw in "[ \t\n\r]{0,8}") {
        prop_assert!(Term::parse(&raw).is_none());
    }
}
