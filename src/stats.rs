//! Statistics Collector
//!
//! Counts occurrences of each event kind and renders the end-of-run
//! summary block. Counters are owned by the evaluator for one run;
//! nothing is process-wide.

use std::time::Duration;

/// Separator bounding the summary block
const SEPARATOR: &str = "------------------------------------";

/// One classified outcome of executing a single command
///
/// Only aggregate counts are retained; individual events are never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Put,
    SuccessfulGet,
    FailedGet,
    Range,
    SuccessfulDelete,
    FailedDelete,
    Load,
}

impl Event {
    /// Stable display name, printed one per line in verbose mode
    pub fn name(self) -> &'static str {
        match self {
            Event::Put => "PUT",
            Event::SuccessfulGet => "SUCCESSFUL_GET",
            Event::FailedGet => "FAILED_GET",
            Event::Range => "RANGE",
            Event::SuccessfulDelete => "SUCCESSFUL_DELETE",
            Event::FailedDelete => "FAILED_DELETE",
            Event::Load => "LOAD",
        }
    }
}

/// Aggregate operation counters for one evaluator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    puts: u64,
    successful_gets: u64,
    failed_gets: u64,
    ranges: u64,
    successful_deletes: u64,
    failed_deletes: u64,
    loads: u64,
}

impl Stats {
    /// Create a zeroed counter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for one event
    pub fn record(&mut self, event: Event) {
        match event {
            Event::Put => self.puts += 1,
            Event::SuccessfulGet => self.successful_gets += 1,
            Event::FailedGet => self.failed_gets += 1,
            Event::Range => self.ranges += 1,
            Event::SuccessfulDelete => self.successful_deletes += 1,
            Event::FailedDelete => self.failed_deletes += 1,
            Event::Load => self.loads += 1,
        }
    }

    // =========================================================================
    // Counter Accessors
    // =========================================================================

    pub fn puts(&self) -> u64 {
        self.puts
    }

    pub fn successful_gets(&self) -> u64 {
        self.successful_gets
    }

    pub fn failed_gets(&self) -> u64 {
        self.failed_gets
    }

    pub fn ranges(&self) -> u64 {
        self.ranges
    }

    pub fn successful_deletes(&self) -> u64 {
        self.successful_deletes
    }

    pub fn failed_deletes(&self) -> u64 {
        self.failed_deletes
    }

    pub fn loads(&self) -> u64 {
        self.loads
    }

    /// Render the end-of-run summary block
    ///
    /// Fixed label order, bounded by separator lines, elapsed time in
    /// seconds. Emitted exactly once per run, and only when verbose
    /// per-event logging was not requested.
    pub fn summary(&self, elapsed: Duration) -> String {
        format!(
            "{sep}\n\
             PUTS {}\n\
             SUCCESSFUL_GETS {}\n\
             FAILED_GETS {}\n\
             RANGES {}\n\
             SUCCESSFUL_DELS {}\n\
             FAILED_DELS {}\n\
             LOADS {}\n\
             TIME_ELAPSED {:.6}\n\
             {sep}\n",
            self.puts,
            self.successful_gets,
            self.failed_gets,
            self.ranges,
            self.successful_deletes,
            self.failed_deletes,
            self.loads,
            elapsed.as_secs_f64(),
            sep = SEPARATOR,
        )
    }
}
