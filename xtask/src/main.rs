//! Custom cargo commands for the wex crate.
//!
//! Usage:
//!   cargo xtask test        - Run all tests (native and wasm feature check)
//!   cargo xtask check       - Quick check (fmt, clippy, tests)
//!   cargo xtask bench       - Run benchmarks
//!   cargo xtask build-wasm  - Build the JS package with wasm-pack

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test        Run all Rust tests, then type-check the wasm feature
  check       Quick check (fmt --check + clippy + tests)
  bench       Run benchmarks
  build-wasm  Build pkg/ with wasm-pack (web target)
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["check", "--lib", "--no-default-features", "--features", "wasm"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo fmt...");
    run_cargo(&["fmt", "--all", "--", "--check"])?;

    println!("[2/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("[3/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build the WebAssembly package exposing `WexAlgorithms`
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack. Install it with: cargo install wasm-pack")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ WASM package written to {}", root.join("pkg").display());
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
