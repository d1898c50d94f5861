//! Custom cargo commands for the glossa crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz <target> [secs] - Run a fuzz target (needs cargo-fuzz, nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["search_queries", "term_expansion"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let target = args.next();
            let secs = args.next();
            fuzz(target.as_deref(), secs.as_deref())?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify              Run full verification suite (fixtures + tests + clippy)
  test                Run all Rust tests
  check               Quick check (cargo check + test + clippy)
  bench               Run benchmarks
  fuzz <TARGET> [S]   Run a fuzz target for S seconds (default 60)
                      Targets: search_queries, term_expansion
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Glossa Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking fixtures...");
    check_fixtures()?;
    println!("✓ Fixtures present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running tests without unicode-normalization...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Feature-less build passed\n");

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

fn fuzz(target: Option<&str>, secs: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("Missing fuzz target (one of: {})", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("Unknown fuzz target '{}' (one of: {})", target, FUZZ_TARGETS.join(", "));
    }
    let secs: u64 = secs
        .unwrap_or("60")
        .parse()
        .context("Fuzz duration must be a number of seconds")?;

    let max_time = format!("-max_total_time={}", secs);
    run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])
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

/// The integration tests read these tables; fail early with a clear message.
fn check_fixtures() -> Result<()> {
    let fixtures = project_root()?.join("data/fixtures");
    for name in [
        "legal_dictionary.csv",
        "malformed.csv",
        "glossary.json",
        "glossa_config.json",
    ] {
        let path = fixtures.join(name);
        if !path.is_file() {
            bail!("Missing fixture {}", path.display());
        }
    }
    Ok(())
}
