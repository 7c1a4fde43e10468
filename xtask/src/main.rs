//! Custom cargo commands for the mitcham crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (default features only)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets
const FUZZ_TARGETS: &[&str] = &["edit_distance", "normalize", "search_queries"];

/// Seconds per target for `cargo xtask fuzz`
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests in both feature sets + clippy)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy, default features)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz and nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("mitcham Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract checks present\n");

    println!("[2/4] Running tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    // Sequential scoring and filter-only normalization take different code paths
    println!("[3/4] Running tests (no default features)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Tests passed without parallel/unicode-normalization\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a fixed time budget
fn fuzz() -> Result<()> {
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ No crashes in {} targets", FUZZ_TARGETS.len());
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no CARGO_MANIFEST_DIR and no current dir")?,
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

/// The pipeline must keep calling every contract in src/contracts.rs.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let pipeline = std::fs::read_to_string(root.join("src/search/pipeline.rs"))
        .context("Failed to read src/search/pipeline.rs")?;

    let required = [
        "check_ranked",
        "check_stage_monotonic",
        "check_positions_in_bounds",
        "check_truncation",
    ];
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !pipeline.contains(&format!("{}(", name)))
        .collect();

    if !missing.is_empty() {
        bail!(
            "Pipeline no longer calls {:?}. Someone may have removed contract checks!",
            missing
        );
    }

    Ok(())
}
