// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type for static sites.
//!
//! A site build writes `search.json` (an array of pages and posts). glint loads
//! it lazily the first time the search box is focused, filters it on every
//! pause in typing, and renders escaped, highlighted result markup.
//!
//! # Architecture
//!
//! ```text
//!  focus / open            keystroke
//!       │                      │
//!       ▼                      ▼
//! ┌─────────────┐      ┌───────────────┐  debounce  ┌──────────┐     ┌──────────┐
//! │ IndexLoader │─────▶│InputController│───────────▶│ matcher  │────▶│ Renderer │──▶ ResultSink
//! │  (index/)   │handle│ (controller)  │   ticket   │(search/) │     │ (render) │
//! └─────────────┘      └───────────────┘            └──────────┘     └──────────┘
//! ```
//!
//! - [`index`]: fetch and cache the index; `Unloaded → Loading → Loaded | Failed`.
//! - [`search`]: case-insensitive substring filter, excerpts, highlighting.
//! - [`render`]: result cards, no-results / loading / error placeholders.
//! - [`controller`]: the debounced state machine behind the input box.
//! - [`runtime`]: tokio driver and widgets (feature `runtime`), browser
//!   bindings (feature `wasm`).
//!
//! # Usage
//!
//! ```
//! use glint::{match_entries, EngineConfig, Renderer, SearchIndex, Term};
//!
//! let index = SearchIndex::from_json(br#"[{"title": "Hello World", "url": "/a"}]"#).unwrap();
//! let config = EngineConfig::default();
//! let term = Term::parse("world").unwrap();
//!
//! let results = match_entries(&index, &term, &config.fields, config.max_results);
//! let html = Renderer::new(&config).render(&results, &term);
//! assert!(html.contains("Hello <em>World</em>"));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod render;
pub mod runtime;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

pub use config::{EngineConfig, Variant};
pub use controller::{InputController, InputSource, Outcome, Phase, ResultSink, Ticket};
pub use error::{ConfigError, IndexLoadError};
pub use index::{IndexHandle, IndexLoader, IndexSource, LoadState, StaticSource};
pub use render::Renderer;
pub use search::{entry_matches, excerpt, highlight, match_entries, ExcerptOptions, Term};
pub use types::{SearchEntry, SearchField, SearchIndex, TextField, FALLBACK_HREF, UNTITLED};
pub use util::escape::{escape_html, escape_value};

#[cfg(feature = "runtime")]
pub use index::{FileSource, SiteSource};

#[cfg(feature = "http")]
pub use index::HttpSource;

#[cfg(feature = "runtime")]
pub use runtime::native::SearchSession;

#[cfg(feature = "runtime")]
pub use runtime::widget::{Chrome, InlineWidget, KeyPress, ModalWidget, UiEvent};
