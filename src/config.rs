//! Configuration for replaykv
//!
//! Centralized configuration with sensible defaults.

/// How a run reports the events it records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Print each event kind as it is recorded; no final summary
    Verbose,

    /// Print one aggregate block at end of run
    Summary,
}

/// Main configuration for an evaluator run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Reporting Configuration
    // -------------------------------------------------------------------------
    /// Per-event log or end-of-run summary (the two are mutually exclusive)
    pub report_mode: ReportMode,

    /// Print query results: get values (blank line on a miss) and range
    /// pairs as space-separated `key:value`
    pub show_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_mode: ReportMode::Summary,
            show_output: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the report mode
    pub fn report_mode(mut self, mode: ReportMode) -> Self {
        self.config.report_mode = mode;
        self
    }

    /// Enable or disable query result output
    pub fn show_output(mut self, show: bool) -> Self {
        self.config.show_output = show;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
