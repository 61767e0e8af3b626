//! Collection Benchmark Tool
//!
//! Builds the same parent/child dataset as an ordered sequence and as a
//! hashed mapping, times one record lookup in each, and reports both
//! durations. Running with no arguments reproduces the reference scenario:
//! 1,000,000 parents with 10 children each, target parent 987665 / child 9.
//!
//! # Usage
//!
//! ```bash
//! # Reference run:
//! cargo run --release -p collection-bench
//!
//! # Smaller dataset, JSON report:
//! cargo run --release -p collection-bench -- bench --parents 100000 --output json
//!
//! # Halve peak memory (one representation resident at a time):
//! cargo run --release -p collection-bench -- bench --low-memory
//!
//! # Standard-container walkthrough:
//! cargo run --release -p collection-bench -- tour
//! ```

mod report;
mod runner;
mod setup;
mod tour;

use clap::{Parser, Subcommand};

const DEFAULT_PARENTS: u32 = 1_000_000;
const DEFAULT_CHILDREN: u32 = 10;
const DEFAULT_TARGET_PARENT: u32 = 987_665;
const DEFAULT_TARGET_CHILD: u32 = 9;

/// Collection benchmark tool: measures linear versus hashed record lookup
/// and demonstrates the standard collections on small examples.
#[derive(Parser)]
#[command(name = "collection-bench", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the lookup benchmark (the default when no subcommand is given).
    Bench(BenchArgs),

    /// Walk each standard collection through its characteristic operation.
    Tour,
}

#[derive(Parser, Clone)]
struct BenchArgs {
    /// Number of parent records; ids are dense `[0, N)`.
    #[arg(long, default_value_t = DEFAULT_PARENTS)]
    parents: u32,

    /// Children per parent; ids are dense `[0, M)` within each parent.
    #[arg(long, default_value_t = DEFAULT_CHILDREN)]
    children: u32,

    /// Parent id to look up.
    #[arg(long, default_value_t = DEFAULT_TARGET_PARENT)]
    target_parent: u32,

    /// Child id to look up within the matched parent.
    #[arg(long, default_value_t = DEFAULT_TARGET_CHILD)]
    target_child: u32,

    /// Keep only one representation resident at a time (measure, discard,
    /// rebuild). Halves peak memory; generation determinism keeps the two
    /// phases comparable.
    #[arg(long, default_value_t = false)]
    low_memory: bool,

    /// Report format.
    #[arg(long, default_value = "text")]
    output: OutputFormat,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl BenchArgs {
    /// The reference scenario, used when the binary runs without arguments.
    fn reference() -> Self {
        BenchArgs {
            parents: DEFAULT_PARENTS,
            children: DEFAULT_CHILDREN,
            target_parent: DEFAULT_TARGET_PARENT,
            target_child: DEFAULT_TARGET_CHILD,
            low_memory: false,
            output: OutputFormat::Text,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup::init_tracing();

    match cli.command {
        Some(Command::Bench(args)) => run_bench(&args),
        Some(Command::Tour) => {
            tour::run();
            Ok(())
        }
        None => run_bench(&BenchArgs::reference()),
    }
}

fn run_bench(args: &BenchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = runner::run(args);

    match args.output {
        OutputFormat::Text => report.print_text(),
        OutputFormat::Json => report.print_json()?,
    }

    Ok(())
}
