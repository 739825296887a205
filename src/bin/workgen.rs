//! replaykv Generator Binary
//!
//! Generates workload traces in the evaluator's command grammar.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use replaykv::generator::{GenSpec, WorkloadGenerator};
use tracing_subscriber::{fmt, EnvFilter};

/// replaykv workload generator
#[derive(Parser, Debug)]
#[command(name = "replaykv-gen")]
#[command(about = "Generate a key-value workload trace")]
#[command(version)]
struct Args {
    /// Number of put operations
    #[arg(short, long)]
    puts: usize,

    /// Number of get operations
    #[arg(short, long, default_value = "0")]
    gets: usize,

    /// Number of range operations
    #[arg(short, long, default_value = "0")]
    ranges: usize,

    /// Number of delete operations
    #[arg(short, long, default_value = "0")]
    deletes: usize,

    /// Probability (0-1) that a get re-queries a previously queried key
    #[arg(long, default_value = "0.0")]
    gets_skewness: f64,

    /// Probability (0-1) that a fresh get targets a probably-absent key
    #[arg(long, default_value = "0.5")]
    gets_misses_ratio: f64,

    /// Store puts in external binary files loaded via `l` commands
    #[arg(short, long)]
    external_puts: bool,

    /// Random number generator seed
    #[arg(short, long, default_value = "13141")]
    seed: u64,

    /// Directory for external put files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() {
    // The trace goes to stdout; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,replaykv=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let spec = GenSpec {
        puts: args.puts,
        gets: args.gets,
        ranges: args.ranges,
        deletes: args.deletes,
        gets_skewness: args.gets_skewness,
        gets_misses_ratio: args.gets_misses_ratio,
        external_puts: args.external_puts,
        seed: args.seed,
    };

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    let mut generator = WorkloadGenerator::new(spec);
    if let Err(err) = generator.generate(out, &args.output_dir) {
        tracing::error!("workload generation failed: {}", err);
        std::process::exit(1);
    }
}
