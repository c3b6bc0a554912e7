//! Benchmark record model and result loading for lanechart.
//!
//! This crate provides the data layer shared by all lanechart reports:
//! the [`BenchmarkRecord`] struct mirroring the JMH JSON result schema,
//! total percentile extraction into [`PercentileSet`], and the result
//! file loader.
//!
//! # Quick Start
//!
//! ```no_run
//! use lanechart_core::{load_records, PercentileSet};
//!
//! let records = load_records("build/reports/jmh/results.json")?;
//! for record in &records {
//!     let percentiles = PercentileSet::from_record(record);
//!     println!("{}: p95 {:.2} ms", record.benchmark, percentiles.p95);
//! }
//! # Ok::<(), lanechart_core::CoreError>(())
//! ```
//!
//! # Modules
//!
//! - [`record`] - The `BenchmarkRecord` struct and its accessors
//! - [`percentiles`] - Percentile extraction
//! - [`loader`] - Result file loading
//! - [`error`] - Error taxonomy for the load path

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod percentiles;
pub mod record;

pub use error::{CoreError, Result};
pub use loader::load_records;
pub use percentiles::PercentileSet;
pub use record::{BenchmarkRecord, PrimaryMetric};
