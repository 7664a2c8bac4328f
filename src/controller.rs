// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The debounced query state machine.
//!
//! ```text
//!            input (term)                 fire, index loaded
//!   Idle ─────────────────▶ Loading ─────────────────────────▶ Ready
//!    ▲                        │  ▲                               │
//!    │      fire, no term     │  └── fire, index not loaded ─────┘
//!    └────────────────────────┴───────────────────────────────────┘
//! ```
//!
//! The controller owns no timers. Every input change hands back a [`Ticket`];
//! the driver (a tokio task natively, `setTimeout` in the browser) waits the
//! debounce delay and calls [`InputController::fire`] with it. Only the most
//! recent ticket does anything. Anything older is a stale timer that slipped
//! past cancellation and is dropped without touching the sink.
//!
//! Input never starts a load. Focus/open events do that through the loader;
//! the controller only reads the shared [`IndexHandle`] when a ticket fires.

use crate::config::EngineConfig;
use crate::index::{IndexHandle, LoadState};
use crate::render::Renderer;
use crate::search::{match_entries, Term};

// =============================================================================
// CAPABILITIES
// =============================================================================

/// The text box the user types into.
pub trait InputSource {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
}

/// The results container.
pub trait ResultSink {
    /// Replace the container's markup and make it visible.
    fn show(&mut self, markup: &str);
    /// Empty and hide the container.
    fn clear(&mut self);
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&mut self, value: &str) {
        (**self).set_value(value)
    }
}

impl<T: ResultSink + ?Sized> ResultSink for Box<T> {
    fn show(&mut self, markup: &str) {
        (**self).show(markup)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Identifies one scheduled match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn new(id: u64) -> Self {
        Ticket(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No term; results hidden.
    #[default]
    Idle,
    /// A term is present but the index isn't available yet.
    Loading,
    /// Results (or the no-results message) are showing.
    Ready,
    /// The last index load failed.
    Failed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Ready => "ready",
            Phase::Failed => "failed",
        }
    }
}

/// What firing a ticket did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Superseded or cancelled ticket; nothing happened.
    Stale,
    /// Empty term; results cleared.
    Cleared,
    /// Index not there yet; loading placeholder shown.
    Loading,
    /// Index failed to load; error placeholder shown.
    Failed,
    /// Matcher and renderer ran.
    Rendered { results: usize },
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Stale => "stale",
            Outcome::Cleared => "cleared",
            Outcome::Loading => "loading",
            Outcome::Failed => "failed",
            Outcome::Rendered { .. } => "rendered",
        }
    }
}

#[derive(Debug)]
struct Pending {
    ticket: Ticket,
    term: Option<Term>,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Orchestrates matcher and renderer for one results container.
#[derive(Debug)]
pub struct InputController<K> {
    config: EngineConfig,
    renderer: Renderer,
    index: IndexHandle,
    sink: K,
    next_ticket: u64,
    pending: Option<Pending>,
    phase: Phase,
}

impl<K: ResultSink> InputController<K> {
    pub fn new(config: EngineConfig, index: &IndexHandle, sink: K) -> Self {
        Self {
            renderer: Renderer::new(&config),
            config,
            index: index.clone(),
            sink,
            next_ticket: 0,
            pending: None,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// The ticket that would currently do something when fired.
    pub fn pending(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Record new input and schedule a match for it.
    ///
    /// Supersedes whatever was pending. The caller fires the returned ticket
    /// after [`EngineConfig::debounce`].
    pub fn input_changed(&mut self, raw: &str) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        if let Some(old) = self.pending.replace(Pending {
            ticket,
            term: Term::parse(raw),
        }) {
            tracing::trace!(superseded = old.ticket.get(), ticket = ticket.get(), "debounce reset");
        }
        ticket
    }

    /// Drop the pending match, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Run the match scheduled under `ticket`.
    pub fn fire(&mut self, ticket: Ticket) -> Outcome {
        let term = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending.term,
            other => {
                self.pending = other;
                tracing::debug!(ticket = ticket.get(), "dropping stale debounce ticket");
                return Outcome::Stale;
            }
        };

        let Some(term) = term else {
            self.sink.clear();
            self.phase = Phase::Idle;
            return Outcome::Cleared;
        };

        match self.index.snapshot() {
            LoadState::Loaded(index) => {
                let results = match_entries(&index, &term, &self.config.fields, self.config.max_results);
                let markup = self.renderer.render(&results, &term);
                self.sink.show(&markup);
                self.phase = Phase::Ready;
                tracing::debug!(term = %term, results = results.len(), "rendered search results");
                Outcome::Rendered {
                    results: results.len(),
                }
            }
            LoadState::Failed(_) => {
                self.sink.show(&self.renderer.render_error());
                self.phase = Phase::Failed;
                Outcome::Failed
            }
            LoadState::Unloaded | LoadState::Loading => {
                self.sink.show(&self.renderer.render_loading());
                self.phase = Phase::Loading;
                Outcome::Loading
            }
        }
    }

    /// Show the load-failure placeholder right away (used when a focus/open
    /// triggered load fails).
    pub fn show_load_error(&mut self) {
        self.sink.show(&self.renderer.render_error());
        self.phase = Phase::Failed;
    }

    /// Cancel anything pending and hide the results.
    pub fn dismiss(&mut self) {
        self.cancel();
        self.sink.clear();
        self.phase = Phase::Idle;
    }
}
