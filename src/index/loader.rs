// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load lifecycle: `Unloaded → Loading → Loaded | Failed`.
//!
//! The state lives behind an [`IndexHandle`] that the loader and the input
//! controller share. Only the loader writes `Loading`; the controller reads
//! the state when a debounced query fires and picks loading / error / results
//! accordingly.
//!
//! Two triggers can race (open the modal, then focus the input before the
//! first fetch returns). Both fetch; that's fine, the index is small and the
//! two results are the same file. The one rule: a failure that lands after a
//! success must not throw the loaded index away.

use parking_lot::Mutex;
use std::sync::Arc;

use super::source::IndexSource;
use crate::error::IndexLoadError;
use crate::types::SearchIndex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded(SearchIndex),
    /// Last attempt failed. Treated like `Unloaded` for retries.
    Failed(IndexLoadError),
}

impl LoadState {
    pub fn index(&self) -> Option<&SearchIndex> {
        match self {
            LoadState::Loaded(index) => Some(index),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Unloaded => "unloaded",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// Shared, cheaply cloneable view of the load state.
#[derive(Debug, Clone, Default)]
pub struct IndexHandle {
    state: Arc<Mutex<LoadState>>,
}

impl IndexHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state. Cloning a loaded index is a refcount bump.
    pub fn snapshot(&self) -> LoadState {
        self.state.lock().clone()
    }

    pub fn index(&self) -> Option<SearchIndex> {
        self.state.lock().index().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.lock(), LoadState::Loaded(_))
    }

    /// Mark a fetch as started, unless an index is already there.
    pub fn begin(&self) {
        let mut state = self.state.lock();
        if !matches!(*state, LoadState::Loaded(_)) {
            *state = LoadState::Loading;
        }
    }

    /// Cache a loaded index. A later success simply replaces an earlier one.
    pub fn store(&self, index: SearchIndex) {
        *self.state.lock() = LoadState::Loaded(index);
    }

    /// Record a failure. Returns `false` (and changes nothing) if an index
    /// was loaded in the meantime.
    pub fn fail(&self, error: IndexLoadError) -> bool {
        let mut state = self.state.lock();
        if matches!(*state, LoadState::Loaded(_)) {
            return false;
        }
        *state = LoadState::Failed(error);
        true
    }

    /// Install an index body fetched by someone else (the page, in a browser).
    /// A body that doesn't decode counts as a failed load. Returns the entry
    /// count.
    pub fn load_json(&self, location: &str, json: &[u8]) -> Result<usize, IndexLoadError> {
        match SearchIndex::from_json(json) {
            Ok(index) => {
                let entries = index.len();
                tracing::info!(source = %location, entries, "search index loaded");
                self.store(index);
                Ok(entries)
            }
            Err(e) => {
                tracing::error!(source = %location, error = %e, "could not load search index");
                self.fail(e.clone());
                Err(e)
            }
        }
    }

    /// Record that fetching `location` failed before there was a body to
    /// decode. Same return as [`fail`](Self::fail).
    pub fn fetch_failed(&self, location: &str, reason: &str) -> bool {
        let error = IndexLoadError::Fetch {
            location: location.to_string(),
            reason: reason.to_string(),
        };
        tracing::error!(source = %location, error = %error, "could not load search index");
        self.fail(error)
    }
}

/// Fetches and caches the index from an [`IndexSource`].
#[derive(Debug)]
pub struct IndexLoader<S> {
    source: S,
    handle: IndexHandle,
}

impl<S: IndexSource> IndexLoader<S> {
    pub fn new(source: S) -> Self {
        Self::with_handle(source, IndexHandle::new())
    }

    /// Load into an existing handle (e.g. one a controller already holds).
    pub fn with_handle(source: S, handle: IndexHandle) -> Self {
        Self { source, handle }
    }

    pub fn handle(&self) -> IndexHandle {
        self.handle.clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the cached index, fetching it first if needed.
    ///
    /// No I/O happens once an index is cached. On failure nothing is cached
    /// and the error is returned for the caller to render.
    pub async fn ensure_loaded(&self) -> Result<SearchIndex, IndexLoadError> {
        if let Some(index) = self.handle.index() {
            tracing::debug!("search index already cached");
            return Ok(index);
        }

        self.handle.begin();
        let location = self.source.describe();
        tracing::info!(source = %location, "loading search index");

        let result = match self.source.fetch().await {
            Ok(bytes) => SearchIndex::from_json(&bytes),
            Err(e) => Err(e),
        };

        match result {
            Ok(index) => {
                tracing::info!(source = %location, entries = index.len(), "search index loaded");
                self.handle.store(index.clone());
                Ok(index)
            }
            Err(e) => {
                tracing::error!(source = %location, error = %e, "could not load search index");
                if self.handle.fail(e.clone()) {
                    Err(e)
                } else {
                    // Another trigger got there first.
                    self.handle.index().ok_or(e)
                }
            }
        }
    }
}
