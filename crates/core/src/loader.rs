//! Result file loading.
//!
//! This module reads a JMH JSON result file into an ordered sequence of
//! benchmark records. Loading is all-or-nothing: a malformed file aborts
//! the run rather than skipping bad records.

use crate::error::{CoreError, Result};
use crate::record::BenchmarkRecord;
use std::fs;
use std::path::Path;

/// Load benchmark records from a JMH JSON result file.
///
/// The path is checked for existence before reading so that a missing
/// file is reported as [`CoreError::ResourceNotFound`] rather than a
/// generic I/O failure.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<BenchmarkRecord>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CoreError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<BenchmarkRecord> =
        serde_json::from_str(&content).map_err(|source| CoreError::MalformedInput {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(count = records.len(), path = %path.display(), "loaded benchmark records");
    Ok(records)
}
