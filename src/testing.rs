// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and in-memory stand-ins for the page
//! (input box, results container, modal chrome) to avoid duplication.

#![doc(hidden)]

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::controller::{InputSource, ResultSink};
use crate::error::IndexLoadError;
use crate::index::IndexSource;
use crate::types::{SearchEntry, SearchIndex};

/// A small blog index. Exactly one entry mentions "world"; none mention "xyz".
pub const SAMPLE_JSON: &str = r#"[
  {
    "title": "Hello World",
    "description": "A gentle intro to systems",
    "content": "Getting started with Rust, one small program at a time.",
    "url": "/a",
    "date": "2024-01-02",
    "tags": ["intro"]
  },
  {
    "title": "Ownership in Practice",
    "description": "Borrowing, moves and lifetimes",
    "content": "The borrow checker rejects programs that alias mutable state.",
    "url": "/b",
    "date": "2023-11-20",
    "tags": ["rust", "memory"]
  },
  {
    "title": "Async Notes",
    "description": "Futures and executors",
    "content": "A future does nothing until it is polled.",
    "url": "/c",
    "tags": ["rust", "async"]
  }
]"#;

/// [`SAMPLE_JSON`] decoded.
pub fn sample_index() -> SearchIndex {
    match SearchIndex::from_json(SAMPLE_JSON.as_bytes()) {
        Ok(index) => index,
        Err(e) => panic!("sample index must decode: {}", e),
    }
}

/// The first entry of [`SAMPLE_JSON`].
pub fn hello_world_entry() -> SearchEntry {
    SearchEntry {
        title: Some("Hello World".to_string()),
        description: Some("A gentle intro to systems".to_string()),
        content: Some("Getting started with Rust, one small program at a time.".to_string()),
        url: Some("/a".to_string()),
        date: Some("2024-01-02".to_string()),
        tags: vec!["intro".to_string()],
    }
}

/// An entry with only a title and a url.
pub fn make_entry(title: &str, url: &str) -> SearchEntry {
    SearchEntry {
        title: Some(title.to_string()),
        url: Some(url.to_string()),
        ..Default::default()
    }
}

// =============================================================================
// SOURCES
// =============================================================================

/// Serves fixed JSON, failing the first `failures` fetches.
///
/// Clones share their counters, so a test can keep one copy and hand the
/// other to a loader.
#[derive(Debug, Clone)]
pub struct FlakySource {
    json: String,
    failures: usize,
    fetches: Arc<AtomicUsize>,
}

impl FlakySource {
    pub fn new(json: &str, failures: usize) -> Self {
        Self {
            json: json.to_string(),
            failures,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source whose every fetch fails.
    pub fn offline() -> Self {
        Self::new("", usize::MAX)
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl IndexSource for FlakySource {
    async fn fetch(&self) -> Result<Vec<u8>, IndexLoadError> {
        let attempt = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= self.failures {
            return Err(IndexLoadError::Fetch {
                location: self.describe(),
                reason: format!("simulated failure {}", attempt),
            });
        }
        Ok(self.json.clone().into_bytes())
    }

    fn describe(&self) -> String {
        "flaky://search.json".to_string()
    }
}

/// Wraps another source and holds every fetch for `delay` (tokio time, so a
/// paused test clock skips it).
#[cfg(feature = "runtime")]
#[derive(Debug, Clone)]
pub struct SlowSource<S> {
    inner: S,
    delay: std::time::Duration,
}

#[cfg(feature = "runtime")]
impl<S: IndexSource> SlowSource<S> {
    pub fn new(inner: S, delay: std::time::Duration) -> Self {
        Self { inner, delay }
    }
}

#[cfg(feature = "runtime")]
impl<S: IndexSource + Sync> IndexSource for SlowSource<S> {
    async fn fetch(&self) -> Result<Vec<u8>, IndexLoadError> {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch().await
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

// =============================================================================
// PAGE STAND-INS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Show(String),
    Clear,
}

#[derive(Debug, Default)]
struct SinkState {
    events: Vec<SinkEvent>,
    markup: String,
    visible: bool,
}

/// A results container that remembers everything written to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    state: Arc<Mutex<SinkState>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.state.lock().events.clone()
    }

    /// Current container markup (`""` after a clear).
    pub fn markup(&self) -> String {
        self.state.lock().markup.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    /// Number of `show` calls so far.
    pub fn renders(&self) -> usize {
        self.state
            .lock()
            .events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Show(_)))
            .count()
    }
}

impl ResultSink for RecordingSink {
    fn show(&mut self, markup: &str) {
        let mut state = self.state.lock();
        state.events.push(SinkEvent::Show(markup.to_string()));
        state.markup = markup.to_string();
        state.visible = true;
    }

    fn clear(&mut self) {
        let mut state = self.state.lock();
        state.events.push(SinkEvent::Clear);
        state.markup.clear();
        state.visible = false;
    }
}

/// An input box backed by a shared string.
#[derive(Debug, Clone, Default)]
pub struct MemoryInput {
    value: Arc<Mutex<String>>,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing (replacing the whole value).
    pub fn type_text(&self, value: &str) {
        *self.value.lock() = value.to_string();
    }
}

impl InputSource for MemoryInput {
    fn value(&self) -> String {
        self.value.lock().clone()
    }

    fn set_value(&mut self, value: &str) {
        *self.value.lock() = value.to_string();
    }
}

#[cfg(feature = "runtime")]
pub use chrome::RecordingChrome;

#[cfg(feature = "runtime")]
mod chrome {
    use parking_lot::Mutex;
    use std::sync::Arc;

    use crate::runtime::widget::Chrome;

    #[derive(Debug, Default)]
    struct ChromeState {
        open: bool,
        scroll_locked: bool,
        focus_requests: usize,
    }

    /// Modal chrome that records visibility, scroll lock and focus requests.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingChrome {
        state: Arc<Mutex<ChromeState>>,
    }

    impl RecordingChrome {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_open(&self) -> bool {
            self.state.lock().open
        }

        pub fn is_scroll_locked(&self) -> bool {
            self.state.lock().scroll_locked
        }

        pub fn focus_requests(&self) -> usize {
            self.state.lock().focus_requests
        }
    }

    impl Chrome for RecordingChrome {
        fn set_open(&mut self, open: bool) {
            self.state.lock().open = open;
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.state.lock().scroll_locked = locked;
        }

        fn focus_input(&mut self) {
            self.state.lock().focus_requests += 1;
        }
    }
}
