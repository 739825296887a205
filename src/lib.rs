//! # replaykv
//!
//! A workload evaluator for ordered key-value stores:
//! - Line-oriented command traces (put/get/range/delete/load)
//! - Rank-addressed range queries over an in-memory ordered store
//! - Binary bulk loading of fixed-width key/value snapshots
//! - Per-event logging or end-of-run operation statistics
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Workload Trace                            │
//! │               (one command per line)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Command Interpreter                          │
//! │          (recognize kind, validate fields)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Evaluator                                │
//! └──────┬──────────────────┬──────────────────────┬────────────┘
//!        │                  │                      │
//!        ▼                  ▼                      ▼
//! ┌─────────────┐   ┌─────────────┐        ┌─────────────┐
//! │   Ordered   │   │    Bulk     │        │ Statistics  │
//! │    Store    │◄──│   Loader    │        │  Collector  │
//! │  (BTreeMap) │   │ (.dat files)│        │  (counters) │
//! └─────────────┘   └─────────────┘        └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod workload;
pub mod loader;
pub mod stats;
pub mod evaluator;
pub mod generator;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ReplayError, Result};
pub use config::{Config, ReportMode};
pub use evaluator::Evaluator;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of replaykv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
