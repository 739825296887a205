//! Error types for replaykv
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ReplayError
pub type Result<T> = std::result::Result<T, ReplayError>;

/// Unified error type for replaykv operations
#[derive(Debug, Error)]
pub enum ReplayError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Workload Errors
    // -------------------------------------------------------------------------
    #[error("workload line {line}: {message}")]
    Parse { line: usize, message: String },

    // -------------------------------------------------------------------------
    // Bulk Load Errors
    // -------------------------------------------------------------------------
    #[error("bulk-load file {}: {source}", .path.display())]
    BulkLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Generator Errors
    // -------------------------------------------------------------------------
    #[error("generator error: {0}")]
    Generate(String),
}
