//! Custom cargo commands for glint.
//!
//! Usage:
//!   cargo xtask check       - cargo check + tests + clippy, every feature set
//!   cargo xtask test        - Run all tests
//!   cargo xtask bench       - Run benchmarks
//!   cargo xtask build-wasm  - Build the browser bindings
//!   cargo xtask fuzz <T>    - Run a fuzz target (needs cargo-fuzz)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["escape_highlight", "index_decoding"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check       cargo check (native, no-default, wasm) + tests + clippy
  test        Run all Rust tests
  bench       Run benchmarks
  build-wasm  Build the wasm32 library with the `wasm` feature
  fuzz <T>    Run a fuzz target: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Quick check across the feature sets we ship.
fn check() -> Result<()> {
    println!("Running checks...\n");

    println!("[1/4] cargo check (default features)...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/4] cargo check (no default features)...");
    run_cargo(&["check", "--lib", "--no-default-features"])?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Checks passed");
    Ok(())
}

fn test() -> Result<()> {
    println!("Running Rust tests...");
    run_cargo(&["test"])
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn build_wasm() -> Result<()> {
    println!("Building wasm32 bindings...");
    run_cargo(&[
        "build",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
        "--features",
        "wasm",
        "--release",
    ])?;
    println!("\n✓ target/wasm32-unknown-unknown/release/glint.wasm");
    Ok(())
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target (one of: {})", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?} (one of: {})", target, FUZZ_TARGETS.join(", "));
    }
    let root = project_root()?;
    run_cargo_in(&root.join("fuzz"), &["+nightly", "fuzz", "run", target])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
