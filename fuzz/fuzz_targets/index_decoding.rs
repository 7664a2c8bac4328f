// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index decoding.
//!
//! `search.json` comes from whatever the site generator produced. Garbage must
//! be a `Parse` error, never a panic, and anything that does decode must render
//! without leaking raw markup.

#![no_main]

use glint::{match_entries, EngineConfig, Renderer, SearchIndex, Term};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(index) = SearchIndex::from_json(data) else {
        return;
    };

    let config = EngineConfig::default();
    let renderer = Renderer::new(&config);
    for query in ["a", "e", "<", "&", "title"] {
        let Some(term) = Term::parse(query) else {
            continue;
        };
        let results = match_entries(&index, &term, &config.fields, config.max_results);
        assert!(results.len() <= config.max_results);
        let html = renderer.render(&results, &term);
        assert!(!html.contains("<script"), "unescaped markup in {:?}", html);
    }
});
