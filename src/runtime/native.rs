// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokio driver for the input controller.
//!
//! A [`SearchSession`] wires one loader, one input box and one results
//! container together. Two kinds of background task:
//!
//! - **Load**: [`SearchSession::start_load`] spawns the fetch and returns at
//!   once, so keystrokes keep scheduling matches (and showing the loading
//!   placeholder) while the index is in flight. A failed load renders the
//!   error placeholder from inside the task. The task owns its share of the
//!   loader, so dropping whoever triggered it doesn't strand the state in
//!   `Loading`.
//! - **Debounce**: each keystroke aborts the previous timer task and spawns a
//!   new `sleep → fire`. The controller's ticket check still applies, so a
//!   task that was already past its sleep when it got aborted can't render
//!   stale results either.
//!
//! ```ignore
//! let mut session = SearchSession::new(config, source, input, sink);
//! session.start_load();        // focus / open
//! session.on_input();          // every keystroke
//! session.loaded().await;      // wait for the fetch (tests, CLI)
//! session.settle().await;      // wait out the debounce (tests, CLI)
//! ```

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::config::EngineConfig;
use crate::controller::{InputController, InputSource, Outcome, Phase, ResultSink, Ticket};
use crate::index::{IndexHandle, IndexLoader, IndexSource};

pub struct SearchSession<S, I, K> {
    loader: Arc<IndexLoader<S>>,
    input: I,
    controller: Arc<Mutex<InputController<K>>>,
    timer: Option<JoinHandle<Outcome>>,
    load_task: Option<JoinHandle<bool>>,
}

impl<S, I, K> SearchSession<S, I, K>
where
    S: IndexSource + Send + Sync + 'static,
    I: InputSource,
    K: ResultSink + Send + 'static,
{
    pub fn new(config: EngineConfig, source: S, input: I, sink: K) -> Self {
        let loader = IndexLoader::new(source);
        let controller = InputController::new(config, &loader.handle(), sink);
        Self {
            loader: Arc::new(loader),
            input,
            controller: Arc::new(Mutex::new(controller)),
            timer: None,
            load_task: None,
        }
    }

    pub fn handle(&self) -> IndexHandle {
        self.loader.handle()
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.controller.lock().phase()
    }

    /// Run `f` against the controller.
    pub fn with_controller<R>(&self, f: impl FnOnce(&mut InputController<K>) -> R) -> R {
        f(&mut *self.controller.lock())
    }

    /// Is a fetch spawned by [`start_load`](Self::start_load) still running?
    pub fn is_loading(&self) -> bool {
        self.load_task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Kick off a lazy index load (focus / open) without waiting for it.
    ///
    /// No-op when the index is cached or this session already has a fetch in
    /// flight. On failure the task renders the error placeholder.
    pub fn start_load(&mut self) {
        if self.loader.handle().is_loaded() || self.is_loading() {
            return;
        }

        let loader = Arc::clone(&self.loader);
        let controller = Arc::clone(&self.controller);
        self.load_task = Some(tokio::spawn(async move {
            match loader.ensure_loaded().await {
                Ok(_) => true,
                Err(_) => {
                    controller.lock().show_load_error();
                    false
                }
            }
        }));
    }

    /// Wait for the fetch started by [`start_load`](Self::start_load). `None`
    /// if none was started since the last wait.
    pub async fn loaded(&mut self) -> Option<bool> {
        let task = self.load_task.take()?;
        task.await.ok()
    }

    /// [`start_load`](Self::start_load), then wait for it. Returns whether an
    /// index is available.
    pub async fn load(&mut self) -> bool {
        self.start_load();
        match self.loaded().await {
            Some(ok) => ok,
            None => self.loader.handle().is_loaded(),
        }
    }

    /// Read the input box and (re)start the debounce timer.
    pub fn on_input(&mut self) -> Ticket {
        let value = self.input.value();
        let (ticket, delay) = {
            let mut controller = self.controller.lock();
            (controller.input_changed(&value), controller.config().debounce())
        };

        if let Some(previous) = self.timer.take() {
            previous.abort();
        }

        let controller = Arc::clone(&self.controller);
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let outcome = controller.lock().fire(ticket);
            tracing::trace!(ticket = ticket.get(), outcome = outcome.as_str(), "debounce fired");
            outcome
        }));
        ticket
    }

    /// Cancel the pending timer and hide results. An in-flight fetch keeps
    /// going; its result is cached for next time.
    pub fn dismiss(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.controller.lock().dismiss();
    }

    /// Empty the input box.
    pub fn reset_input(&mut self) {
        self.input.set_value("");
    }

    /// Wait for the pending timer, if any. `None` if nothing was pending or
    /// the timer was aborted.
    pub async fn settle(&mut self) -> Option<Outcome> {
        let timer = self.timer.take()?;
        timer.await.ok()
    }
}
