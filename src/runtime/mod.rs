// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Drivers for the input controller.
//!
//! The controller itself is runtime-agnostic. Natively, tokio tasks provide
//! the debounce timers and the widgets translate page events into calls on a
//! [`native::SearchSession`]. In the browser, `setTimeout` does the timing and
//! the WASM bindings expose the controller to JavaScript.

#[cfg(feature = "runtime")]
pub mod native;

#[cfg(feature = "runtime")]
pub mod widget;

#[cfg(feature = "wasm")]
pub mod wasm;
