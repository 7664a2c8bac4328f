// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by matching and rendering.
//!
//! Case folding that keeps character offsets stable, HTML escaping for
//! everything that comes out of the index, and the date formatting used by
//! result cards.

pub mod date;
pub mod escape;
pub mod normalize;
