//! Evaluator Module
//!
//! The coordinating component that replays a workload.
//!
//! ## Responsibilities
//! - Parse and dispatch workload lines in order
//! - Apply commands to the ordered store
//! - Drive bulk loads to completion within their `l` command
//! - Record one event per executed command

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use crate::config::{Config, ReportMode};
use crate::error::{ReplayError, Result};
use crate::loader::BulkFile;
use crate::stats::{Event, Stats};
use crate::store::Store;
use crate::workload::{parse_line, Command};

/// The workload evaluator
///
/// ## Execution Model: strictly sequential
///
/// One workload line (or one bulk-load record) is fully processed,
/// store mutation/query plus statistics update, before the next is
/// read. The store, the statistics, and any open file handle are
/// exclusively owned by the evaluator for the lifetime of one run.
pub struct Evaluator<W: Write> {
    /// Run configuration
    config: Config,

    /// The ordered store the workload replays against
    store: Store,

    /// Aggregate event counters
    stats: Stats,

    /// Sink for query results, verbose event lines, and the summary
    out: W,
}

impl Evaluator<io::Stdout> {
    /// Create an evaluator writing to stdout
    pub fn new(config: Config) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Evaluator<W> {
    /// Create an evaluator writing to an arbitrary sink
    pub fn with_output(config: Config, out: W) -> Self {
        Self {
            config,
            store: Store::new(),
            stats: Stats::new(),
            out,
        }
    }

    /// Replay a workload source to completion
    ///
    /// Reads lines in order, parses each into a command, and executes
    /// it. Blank lines are skipped. The elapsed time covers the whole
    /// replay loop; in summary mode the aggregate block is rendered
    /// once at the end.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let start = Instant::now();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = parse_line(index + 1, &line)?;
            self.execute(command)?;
        }

        let elapsed = start.elapsed();
        tracing::debug!(?elapsed, "replay complete");

        if self.config.report_mode == ReportMode::Summary {
            write!(self.out, "{}", self.stats.summary(elapsed))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Replay a workload file
    pub fn run_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        self.run(BufReader::new(file))
    }

    /// Execute a single command
    ///
    /// Routes commands to the appropriate handler.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Put { key, value } => self.put(key, value),
            Command::Get { key } => self.get(key),
            Command::Range { start, end } => self.range(start, end),
            Command::Delete { key } => self.delete(key),
            Command::Load { path } => self.load(&path),
        }
    }

    fn put(&mut self, key: i32, value: i32) -> Result<()> {
        self.store.put(key, value);
        self.record(Event::Put)
    }

    fn get(&mut self, key: i32) -> Result<()> {
        match self.store.get(key) {
            Some(value) => {
                if self.config.show_output {
                    writeln!(self.out, "{}", value)?;
                }
                self.record(Event::SuccessfulGet)
            }
            None => {
                // A miss prints a blank line, not an error message.
                if self.config.show_output {
                    writeln!(self.out)?;
                }
                self.record(Event::FailedGet)
            }
        }
    }

    fn range(&mut self, start: i64, end: i64) -> Result<()> {
        let entries = self.store.range(start, end);
        if self.config.show_output {
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{}:{}", key, value))
                .collect();
            writeln!(self.out, "{}", rendered.join(" "))?;
        }
        self.record(Event::Range)
    }

    fn delete(&mut self, key: i32) -> Result<()> {
        if self.store.delete(key) {
            self.record(Event::SuccessfulDelete)
        } else {
            self.record(Event::FailedDelete)
        }
    }

    /// Bulk-load a binary snapshot
    ///
    /// The file is read to completion (or to the first truncated
    /// record) before the next workload line is interpreted. One LOAD
    /// event, plus one PUT event per fully-decoded record.
    fn load(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|source| bulk_error(path, source))?;
        let mut snapshot = BulkFile::new(BufReader::new(file));

        self.record(Event::Load)?;

        let mut records = 0u64;
        while let Some((key, value)) = snapshot
            .next_record()
            .map_err(|source| bulk_error(path, source))?
        {
            self.store.put(key, value);
            self.record(Event::Put)?;
            records += 1;
        }

        tracing::debug!(path = %path.display(), records, "bulk load applied");
        Ok(())
    }

    /// Record one event, echoing its name in verbose mode
    fn record(&mut self, event: Event) -> Result<()> {
        self.stats.record(event);
        if self.config.report_mode == ReportMode::Verbose {
            writeln!(self.out, "{}", event.name())?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Aggregate statistics recorded so far
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The current store contents
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the evaluator and return its output sink
    pub fn into_output(self) -> W {
        self.out
    }
}

fn bulk_error(path: &Path, source: io::Error) -> ReplayError {
    ReplayError::BulkLoad {
        path: path.to_path_buf(),
        source,
    }
}
