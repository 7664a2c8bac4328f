// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two widgets as event handlers.
//!
//! The page translates DOM events into [`UiEvent`]s; everything the widgets
//! do to the page goes through [`InputSource`], [`ResultSink`] and [`Chrome`].
//! Handling an event never waits on the network: loads run as background
//! tasks, so input typed while the index is in flight is still scheduled.
//!
//! | Event                    | Modal                                   | Inline          |
//! |--------------------------|-----------------------------------------|-----------------|
//! | `Open`, Ctrl/Cmd+K       | show, lock scroll, focus input, load    | ignored         |
//! | `Close`, overlay, Escape | hide, unlock, clear input and results   | ignored         |
//! | `Focus`                  | load                                    | load            |
//! | `Input`                  | schedule a match                        | schedule        |
//! | `ClickOutside`           | ignored (the overlay covers it)         | hide results    |

use super::native::SearchSession;
use crate::config::EngineConfig;
use crate::controller::{InputSource, ResultSink};
use crate::index::IndexSource;

/// Page-level side effects of the modal.
pub trait Chrome {
    fn set_open(&mut self, open: bool);
    fn set_scroll_locked(&mut self, locked: bool);
    fn focus_input(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Escape,
    /// Ctrl+K / Cmd+K.
    OpenShortcut,
    Other,
}

impl KeyPress {
    /// Classify a `KeyboardEvent` by its `key` and modifier flags.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Self {
        match key {
            "Escape" => KeyPress::Escape,
            "k" | "K" if ctrl || meta => KeyPress::OpenShortcut,
            _ => KeyPress::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The header search button.
    Open,
    /// The modal's close button.
    Close,
    OverlayClick,
    Key(KeyPress),
    Focus,
    Input,
    /// Interaction outside both the input and the results.
    ClickOutside,
}

/// Full-screen search opened from the header.
pub struct ModalWidget<S, I, K, C> {
    session: SearchSession<S, I, K>,
    chrome: C,
    open: bool,
}

impl<S, I, K, C> ModalWidget<S, I, K, C>
where
    S: IndexSource + Send + Sync + 'static,
    I: InputSource,
    K: ResultSink + Send + 'static,
    C: Chrome,
{
    pub fn new(config: EngineConfig, source: S, input: I, sink: K, chrome: C) -> Self {
        Self {
            session: SearchSession::new(config, source, input, sink),
            chrome,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn session(&self) -> &SearchSession<S, I, K> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SearchSession<S, I, K> {
        &mut self.session
    }

    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Open | UiEvent::Key(KeyPress::OpenShortcut) => self.open(),
            UiEvent::Close | UiEvent::OverlayClick => self.close(),
            UiEvent::Key(KeyPress::Escape) if self.open => self.close(),
            UiEvent::Key(_) | UiEvent::ClickOutside => {}
            UiEvent::Focus => self.session.start_load(),
            UiEvent::Input => {
                self.session.on_input();
            }
        }
    }

    fn open(&mut self) {
        self.open = true;
        self.chrome.set_open(true);
        self.chrome.set_scroll_locked(true);
        self.chrome.focus_input();
        self.session.start_load();
    }

    fn close(&mut self) {
        self.open = false;
        self.chrome.set_open(false);
        self.chrome.set_scroll_locked(false);
        self.session.reset_input();
        self.session.dismiss();
    }
}

/// Search box embedded in a page, results dropping down beneath it.
pub struct InlineWidget<S, I, K> {
    session: SearchSession<S, I, K>,
}

impl<S, I, K> InlineWidget<S, I, K>
where
    S: IndexSource + Send + Sync + 'static,
    I: InputSource,
    K: ResultSink + Send + 'static,
{
    pub fn new(config: EngineConfig, source: S, input: I, sink: K) -> Self {
        Self {
            session: SearchSession::new(config, source, input, sink),
        }
    }

    pub fn session(&self) -> &SearchSession<S, I, K> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SearchSession<S, I, K> {
        &mut self.session
    }

    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Focus => self.session.start_load(),
            UiEvent::Input => {
                self.session.on_input();
            }
            UiEvent::ClickOutside => self.session.dismiss(),
            UiEvent::Open | UiEvent::Close | UiEvent::OverlayClick | UiEvent::Key(_) => {}
        }
    }
}
