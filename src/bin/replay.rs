//! replaykv Evaluator Binary
//!
//! Replays a workload trace against the in-memory ordered store.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use replaykv::{Config, Evaluator, ReportMode};
use tracing_subscriber::{fmt, EnvFilter};

/// replaykv workload evaluator
#[derive(Parser, Debug)]
#[command(name = "replaykv")]
#[command(about = "Replay a key-value workload trace against an in-memory ordered store")]
#[command(version)]
struct Args {
    /// Workload trace file (one command per line)
    workload: PathBuf,

    /// Print each event as it is executed instead of a final summary
    #[arg(short, long)]
    verbose: bool,

    /// Print query results (get values and range pairs)
    #[arg(short, long)]
    show_output: bool,
}

fn main() {
    // Initialize tracing/logging on stderr; stdout carries the workload
    // output and must stay diffable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,replaykv=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let report_mode = if args.verbose {
        ReportMode::Verbose
    } else {
        ReportMode::Summary
    };
    let config = Config::builder()
        .report_mode(report_mode)
        .show_output(args.show_output)
        .build();

    let mut evaluator = Evaluator::new(config);
    if let Err(err) = evaluator.run_file(&args.workload) {
        tracing::error!("replay of {} failed: {}", args.workload.display(), err);
        std::process::exit(1);
    }
}
