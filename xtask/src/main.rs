//! xtask - Development task runner for sortedseq
//!
//! Usage:
//!   cargo xtask ci
//!   cargo xtask test [--features <features>]
//!   cargo xtask bench [--bench <name>]

mod tasks;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for sortedseq")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full CI pipeline: format check, clippy, tests, doc tests
    Ci,
    /// Check or apply rustfmt formatting
    Fmt(tasks::FmtArgs),
    /// Run clippy with warnings denied
    Clippy,
    /// Run the test suite
    Test(tasks::TestArgs),
    /// Run criterion benchmarks
    Bench(tasks::BenchArgs),
    /// Build API documentation
    Doc(tasks::DocArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => tasks::ci(),
        Commands::Fmt(args) => tasks::fmt(args),
        Commands::Clippy => tasks::clippy(),
        Commands::Test(args) => tasks::test(args),
        Commands::Bench(args) => tasks::bench(args),
        Commands::Doc(args) => tasks::doc(args),
    }
}
