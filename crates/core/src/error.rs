//! Error taxonomy for the load path.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading benchmark results.
///
/// All variants are fatal to an invocation: a result file that cannot
/// be loaded in full aborts the run, there is no record-level recovery.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The input path does not exist.
    #[error("benchmark result file not found: {path}")]
    ResourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The input file exists but could not be read.
    #[error("failed to read benchmark result file {path}: {source}")]
    Io {
        /// The unreadable path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The input file content does not parse into benchmark records.
    #[error("malformed benchmark result file {path}: {source}")]
    MalformedInput {
        /// The malformed path.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, CoreError>;
