// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use glint::util::date::{format_date, parse_date};
use glint::{
    match_entries, EngineConfig, IndexLoader, IndexSource, Renderer, SearchEntry, SearchIndex,
    SiteSource, Term, Variant,
};

mod cli;
use cli::display::{self, BOX_WIDTH, TEXT_WIDTH};
use cli::{Cli, Commands, Format};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            source,
            query,
            variant,
            limit,
            config,
            format,
        } => {
            run_search(&source, &query, variant, limit, config.as_deref(), format).await
        }
        Commands::Inspect { source, config } => run_inspect(&source, config.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--format html` output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Preset, or the config file instead of it, then `--limit` on top.
fn resolve_config(
    variant: Variant,
    config: Option<&Path>,
    limit: Option<usize>,
) -> Result<EngineConfig> {
    let mut resolved = match config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => variant.config(),
    };
    if let Some(limit) = limit {
        resolved.max_results = limit;
    }
    resolved.validate().context("invalid settings")?;
    Ok(resolved)
}

async fn load(source: &str, config: &EngineConfig) -> Result<SearchIndex> {
    let loader = IndexLoader::new(SiteSource::resolve(source, &config.index_path));
    loader
        .ensure_loaded()
        .await
        .with_context(|| format!("could not load index from {}", loader.source().describe()))
}

async fn run_search(
    source: &str,
    query: &str,
    variant: Variant,
    limit: Option<usize>,
    config: Option<&Path>,
    format: Format,
) -> Result<()> {
    let config = resolve_config(variant, config, limit)?;
    let Some(term) = Term::parse(query) else {
        bail!("empty query");
    };
    let index = load(source, &config).await?;

    let results = match_entries(&index, &term, &config.fields, config.max_results);
    let renderer = Renderer::new(&config);
    match format {
        Format::Html => println!("{}", renderer.render(&results, &term)),
        Format::Text => print_results(&results, &term, &renderer, config.max_tags),
    }
    Ok(())
}

fn print_results(results: &[&SearchEntry], term: &Term, renderer: &Renderer, max_tags: usize) {
    let label = match results.len() {
        0 => format!("No results found for \"{}\"", term),
        1 => format!("1 result for \"{}\"", term),
        n => format!("{} results for \"{}\"", n, term),
    };
    display::section_top(&label);

    for (i, entry) in results.iter().enumerate() {
        if i > 0 {
            display::row("");
        }

        let title = display::emphasize(&display::truncate(entry.display_title(), TEXT_WIDTH - 14), term);
        let date = entry
            .date()
            .map(|d| display::themed(display::GRAY, &[], &format_date(d)))
            .unwrap_or_default();
        display::row(&format!(
            "  {}  {}",
            display::themed(display::CYAN, &[display::BOLD], &title),
            date
        ));
        display::row(&format!(
            "  {}",
            display::themed(display::BLUE, &[], &display::truncate(entry.href(), TEXT_WIDTH))
        ));

        for line in display::wrap(&renderer.excerpt_for(entry, term), TEXT_WIDTH) {
            display::row(&format!("  {}", display::emphasize(&line, term)));
        }

        if !entry.tags.is_empty() && max_tags > 0 {
            let tags: Vec<String> = entry
                .tags
                .iter()
                .take(max_tags)
                .map(|t| display::tag_badge(t))
                .collect();
            display::row(&format!("  {}", tags.join(" ")));
        }
    }

    display::section_bot();
}

async fn run_inspect(source: &str, config: Option<&Path>) -> Result<()> {
    let config = resolve_config(Variant::Modal, config, None)?;
    let index = load(source, &config).await?;
    let total = index.len();

    display::section_top(&format!(
        "{}: {} entries",
        display::truncate(source, BOX_WIDTH - 30),
        total
    ));
    for (field, count) in coverage(&index) {
        display::row(&format!(
            "  {} {} {}",
            display::pad_right(field, 14),
            display::coverage(count, total),
            display::themed(display::GRAY, &[], &format!("({}/{})", count, total))
        ));
    }
    display::section_bot();
    Ok(())
}

/// How many entries carry each field (dates counted twice: present, and
/// present in a format we can display nicely).
fn coverage(index: &SearchIndex) -> Vec<(&'static str, usize)> {
    fn filled(value: &Option<String>) -> bool {
        value.as_deref().is_some_and(|s| !s.is_empty())
    }

    let count = |has: fn(&SearchEntry) -> bool| index.iter().filter(|&e| has(e)).count();
    vec![
        ("title", count(|e| filled(&e.title))),
        ("description", count(|e| filled(&e.description))),
        ("content", count(|e| filled(&e.content))),
        ("url", count(|e| filled(&e.url))),
        ("date", count(|e| e.date().is_some())),
        ("date (parsed)", count(|e| e.date().and_then(parse_date).is_some())),
        ("tags", count(|e| !e.tags.is_empty())),
    ]
}
