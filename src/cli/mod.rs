// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glint command-line interface.
//!
//! Two subcommands: `search` runs one query through the same matcher and
//! renderer the widgets use, and `inspect` summarizes an index. Both take a
//! SOURCE that is a `search.json` path, a built site directory, or a site URL.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use glint::Variant;

#[derive(Parser)]
#[command(
    name = "glint",
    about = "Search a static site's search.json from the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query and print the results
    Search {
        /// Index file, built site directory, or http(s) site URL
        source: String,

        /// Search query
        query: String,

        /// Widget preset to search with
        #[arg(long, value_enum, default_value_t = Variant::Modal)]
        variant: Variant,

        /// Maximum number of results (overrides the preset)
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSON config file; replaces the preset
        #[arg(long, env = "GLINT_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Summarize an index: entry count and field coverage
    Inspect {
        /// Index file, built site directory, or http(s) site URL
        source: String,

        /// JSON config file (only `indexPath` is used)
        #[arg(long, env = "GLINT_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The markup the widget would insert
    Html,
    /// Human-readable terminal output
    Text,
}
