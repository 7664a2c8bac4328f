// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for glint.
//!
//! The page keeps doing what the browser is good at (fetching `/search.json`,
//! running `setTimeout`, owning the DOM) and hands the rest to Rust. Two
//! entry points:
//!
//! - [`GlintEngine`]: stateless-feeling `search(query) → markup`, for pages
//!   that want to wire their own debounce.
//! - [`GlintController`]: the full state machine. Every `input()` returns a
//!   ticket; fire it after `debounceMs` and the controller calls your
//!   callback with markup (or `null` to clear and hide).
//!
//! ```js
//! const ctl = new GlintController({ highlightTag: "mark" }, (html) => {
//!     results.hidden = html === null;
//!     results.innerHTML = html ?? "";
//! });
//! input.addEventListener("focus", async () => {
//!     if (ctl.isLoaded()) return;
//!     try {
//!         ctl.loadIndex(await (await fetch(ctl.indexPath())).text());
//!     } catch (e) {
//!         ctl.loadFailed(String(e));
//!     }
//! });
//! let timer;
//! input.addEventListener("input", () => {
//!     clearTimeout(timer);
//!     const ticket = ctl.input(input.value);
//!     timer = setTimeout(() => ctl.fire(ticket), ctl.debounceMs());
//! });
//! ```

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::controller::{InputController, ResultSink, Ticket};
use crate::index::{IndexHandle, LoadState};
use crate::render::Renderer;
use crate::search::{match_entries, Term};
use crate::util::escape::escape_html;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Options object → validated config. `undefined`/`null` means defaults.
fn config_from_js(options: JsValue) -> Result<EngineConfig, JsValue> {
    let config: EngineConfig = if options.is_undefined() || options.is_null() {
        EngineConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
    };
    config.validate().map_err(js_error)?;
    Ok(config)
}

/// Escape `& < > " '`. Non-string values escape to `""`.
#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html_js(value: JsValue) -> String {
    match value.as_string() {
        Some(s) => escape_html(&s),
        None => String::new(),
    }
}

// =============================================================================
// ENGINE
// =============================================================================

#[wasm_bindgen]
pub struct GlintEngine {
    config: EngineConfig,
    renderer: Renderer,
    handle: IndexHandle,
}

#[wasm_bindgen]
impl GlintEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<GlintEngine, JsValue> {
        let config = config_from_js(options)?;
        Ok(GlintEngine {
            renderer: Renderer::new(&config),
            config,
            handle: IndexHandle::new(),
        })
    }

    /// Where the page should fetch the index from.
    #[wasm_bindgen(js_name = indexPath)]
    pub fn index_path(&self) -> String {
        self.config.index_path.clone()
    }

    /// Install a fetched index body. Returns the entry count.
    #[wasm_bindgen(js_name = loadIndex)]
    pub fn load_index(&self, json: &str) -> Result<usize, JsValue> {
        self.handle
            .load_json(&self.config.index_path, json.as_bytes())
            .map_err(js_error)
    }

    /// Record that the fetch itself failed.
    #[wasm_bindgen(js_name = loadFailed)]
    pub fn load_failed(&self, reason: &str) {
        self.handle.fetch_failed(&self.config.index_path, reason);
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.handle.is_loaded()
    }

    /// Markup for `query`: results, the no-results message, or a loading /
    /// error placeholder. `""` for an empty query.
    pub fn search(&self, query: &str) -> String {
        let Some(term) = Term::parse(query) else {
            return String::new();
        };
        match self.handle.snapshot() {
            LoadState::Loaded(index) => {
                let results =
                    match_entries(&index, &term, &self.config.fields, self.config.max_results);
                self.renderer.render(&results, &term)
            }
            LoadState::Failed(_) => self.renderer.render_error(),
            LoadState::Unloaded | LoadState::Loading => self.renderer.render_loading(),
        }
    }

    /// Matching entries as plain objects, for pages that render themselves.
    #[wasm_bindgen(js_name = searchEntries)]
    pub fn search_entries(&self, query: &str) -> Result<JsValue, JsValue> {
        let (Some(term), Some(index)) = (Term::parse(query), self.handle.index()) else {
            return serde_wasm_bindgen::to_value(&Vec::<()>::new()).map_err(js_error);
        };
        let results = match_entries(&index, &term, &self.config.fields, self.config.max_results);
        serde_wasm_bindgen::to_value(&results).map_err(js_error)
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Result sink backed by a JS callback: `(markup: string | null) => void`.
struct JsSink(Function);

impl JsSink {
    fn call(&self, arg: &JsValue) {
        if let Err(e) = self.0.call1(&JsValue::NULL, arg) {
            tracing::warn!(error = ?e, "results callback threw");
        }
    }
}

impl ResultSink for JsSink {
    fn show(&mut self, markup: &str) {
        self.call(&JsValue::from_str(markup));
    }

    fn clear(&mut self) {
        self.call(&JsValue::NULL);
    }
}

#[wasm_bindgen]
pub struct GlintController {
    controller: InputController<JsSink>,
    handle: IndexHandle,
}

#[wasm_bindgen]
impl GlintController {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, on_results: Function) -> Result<GlintController, JsValue> {
        let config = config_from_js(options)?;
        let handle = IndexHandle::new();
        Ok(GlintController {
            controller: InputController::new(config, &handle, JsSink(on_results)),
            handle,
        })
    }

    #[wasm_bindgen(js_name = indexPath)]
    pub fn index_path(&self) -> String {
        self.controller.config().index_path.clone()
    }

    #[wasm_bindgen(js_name = debounceMs)]
    pub fn debounce_ms(&self) -> f64 {
        self.controller.config().debounce_ms as f64
    }

    /// Mark a fetch as in flight.
    #[wasm_bindgen(js_name = loadStarted)]
    pub fn load_started(&self) {
        self.handle.begin();
    }

    /// Install a fetched index body. A body that doesn't decode shows the
    /// error placeholder and throws.
    #[wasm_bindgen(js_name = loadIndex)]
    pub fn load_index(&mut self, json: &str) -> Result<usize, JsValue> {
        let location = self.index_path();
        self.handle
            .load_json(&location, json.as_bytes())
            .map_err(|e| {
                self.controller.show_load_error();
                js_error(e)
            })
    }

    /// Record a failed fetch and show the error placeholder.
    #[wasm_bindgen(js_name = loadFailed)]
    pub fn load_failed(&mut self, reason: &str) {
        let location = self.index_path();
        self.handle.fetch_failed(&location, reason);
        self.controller.show_load_error();
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.handle.is_loaded()
    }

    /// Record new input. Returns the ticket to fire after `debounceMs()`.
    pub fn input(&mut self, value: &str) -> f64 {
        self.controller.input_changed(value).get() as f64
    }

    /// Fire a ticket. Returns what happened: `"stale"`, `"cleared"`,
    /// `"loading"`, `"failed"` or `"rendered"`.
    pub fn fire(&mut self, ticket: f64) -> String {
        self.controller
            .fire(Ticket::new(ticket as u64))
            .as_str()
            .to_string()
    }

    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    /// Cancel the pending match and clear results (close / click outside).
    pub fn dismiss(&mut self) {
        self.controller.dismiss();
    }

    pub fn phase(&self) -> String {
        self.controller.phase().as_str().to_string()
    }
}
