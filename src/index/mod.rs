// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting the index into memory, exactly once.
//!
//! The index is a static file produced by the site build. It's fetched lazily
//! the first time a widget is opened or focused, then kept for the rest of the
//! session. A failed fetch leaves nothing cached so the next trigger retries.
//!
//! - [`source`]: where the bytes come from (memory, disk, HTTP)
//! - [`loader`]: the load lifecycle and the shared cache

pub mod loader;
pub mod source;

pub use loader::{IndexHandle, IndexLoader, LoadState};
pub use source::{IndexSource, StaticSource};

#[cfg(feature = "runtime")]
pub use source::{FileSource, SiteSource};

#[cfg(feature = "http")]
pub use source::HttpSource;
