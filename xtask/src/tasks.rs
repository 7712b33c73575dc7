//! Cargo task implementations.
//!
//! Each task shells out to cargo from the project root so the commands
//! behave the same locally and in CI.

use anyhow::{Context, Result, bail};
use clap::Args;
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Arguments for the fmt subcommand
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Apply formatting instead of only checking
    #[arg(long)]
    pub fix: bool,
}

/// Arguments for the test subcommand
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Feature list passed through to cargo (default: --all-features)
    #[arg(long)]
    pub features: Option<String>,
}

/// Arguments for the bench subcommand
#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Run a single benchmark target instead of all of them
    #[arg(long)]
    pub bench: Option<String>,
}

/// Arguments for the doc subcommand
#[derive(Args, Debug)]
pub struct DocArgs {
    /// Open the generated documentation in a browser
    #[arg(long)]
    pub open: bool,
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // xtask lives in project_root/xtask, so go up one level
    let root = if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .context("xtask directory has no parent")?
            .to_path_buf()
    } else {
        manifest_dir
    };

    Ok(root)
}

/// Run a cargo subcommand from the project root, failing on a non-zero
/// exit status.
fn run_cargo(description: &str, arguments: &[&str]) -> Result<()> {
    let root = project_root()?;
    eprintln!("Running {description}...");

    let status = Command::new("cargo")
        .args(arguments)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to launch cargo for {description}"))?;

    if !status.success() {
        bail!("{description} failed");
    }

    Ok(())
}

/// Full CI pipeline: formatting, lints, tests, doc tests.
pub fn ci() -> Result<()> {
    fmt(FmtArgs { fix: false })?;
    clippy()?;
    test(TestArgs { features: None })?;
    run_cargo("doc tests", &["test", "--doc", "--all-features"])?;
    eprintln!("CI pipeline passed");
    Ok(())
}

pub fn fmt(args: FmtArgs) -> Result<()> {
    if args.fix {
        run_cargo("rustfmt", &["fmt", "--all"])
    } else {
        run_cargo("format check", &["fmt", "--all", "--check"])
    }
}

pub fn clippy() -> Result<()> {
    run_cargo(
        "clippy",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--all-features",
            "--",
            "-D",
            "warnings",
        ],
    )
}

pub fn test(args: TestArgs) -> Result<()> {
    match args.features {
        Some(features) => run_cargo(
            "tests",
            &["test", "--no-default-features", "--features", &features],
        ),
        None => run_cargo("tests", &["test", "--all-features"]),
    }
}

pub fn bench(args: BenchArgs) -> Result<()> {
    match args.bench {
        Some(name) => run_cargo("benchmarks", &["bench", "--bench", &name]),
        None => run_cargo("benchmarks", &["bench"]),
    }
}

pub fn doc(args: DocArgs) -> Result<()> {
    if args.open {
        run_cargo(
            "documentation",
            &["doc", "--all-features", "--no-deps", "--open"],
        )
    } else {
        run_cargo("documentation", &["doc", "--all-features", "--no-deps"])
    }
}
