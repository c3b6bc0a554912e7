// Copyright 2025 Redis Laned Contributors
// SPDX-License-Identifier: Apache-2.0

//! Selection overhead report.
//!
//! Groups `SelectionOverheadBenchmark` records by the trailing method
//! name of the benchmark identifier, classified into four fixed
//! buckets, and plots each bucket's scalar score as a bar. The stored
//! score unit is milliseconds per operation; the chart displays
//! microseconds, so scores are converted during gathering.

use lanechart_core::BenchmarkRecord;
use lanechart_render::{Bar, BarChart, ChartBackend, RenderError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Benchmark identifier marker selecting this experiment's records.
pub const EXPERIMENT_MARKER: &str = "SelectionOverheadBenchmark";

const ARTIFACT_STEM: &str = "selection_overhead";

/// Stored scores are milliseconds per operation; the chart displays
/// microseconds.
const MILLIS_TO_MICROS: f64 = 1000.0;

/// Classification bucket for a selection-overhead method, in display
/// order. Closed set: method names matching none of the four known
/// substrings are dropped during gathering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverheadBucket {
    /// Command round-trip without any lane selection.
    Baseline,
    /// Round-robin selection plus command.
    RoundRobin,
    /// Thread-affinity selection plus command.
    ThreadAffinity,
    /// Least-used selection plus command.
    LeastUsed,
}

impl OverheadBucket {
    /// Classify a benchmark method name by substring match.
    pub fn classify(method: &str) -> Option<Self> {
        if method.contains("baseline") {
            Some(Self::Baseline)
        } else if method.contains("roundRobin") {
            Some(Self::RoundRobin)
        } else if method.contains("threadAffinity") {
            Some(Self::ThreadAffinity)
        } else if method.contains("leastUsed") {
            Some(Self::LeastUsed)
        } else {
            None
        }
    }

    /// Human-facing label used as the bar tick.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::RoundRobin => "RoundRobin",
            Self::ThreadAffinity => "ThreadAffinity",
            Self::LeastUsed => "LeastUsed",
        }
    }
}

/// Overhead of the slowest strategy relative to the baseline bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverheadAnnotation {
    /// Absolute overhead over baseline, in microseconds.
    pub absolute_us: f64,
    /// Overhead as a share of the slowest strategy's total, in percent.
    pub percent: f64,
}

/// Scalar scores in microseconds keyed by bucket, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverheadBuckets {
    by_bucket: BTreeMap<OverheadBucket, f64>,
}

impl OverheadBuckets {
    /// Buckets and values in display order.
    pub fn buckets(&self) -> impl Iterator<Item = (OverheadBucket, f64)> + '_ {
        self.by_bucket.iter().map(|(bucket, value)| (*bucket, *value))
    }

    /// The value for `bucket` in microseconds, if measured.
    pub fn get(&self, bucket: OverheadBucket) -> Option<f64> {
        self.by_bucket.get(&bucket).copied()
    }

    /// Overhead of the slowest non-baseline bucket over the baseline.
    ///
    /// `None` without a positive baseline value or without at least one
    /// non-baseline bucket to compare against.
    pub fn vs_baseline(&self) -> Option<OverheadAnnotation> {
        let baseline = self.get(OverheadBucket::Baseline)?;
        if baseline <= 0.0 {
            return None;
        }

        let max_strategy = self
            .by_bucket
            .iter()
            .filter(|(bucket, _)| **bucket != OverheadBucket::Baseline)
            .map(|(_, value)| *value)
            .max_by(|a, b| a.total_cmp(b))?;
        if max_strategy <= 0.0 {
            return None;
        }

        let absolute_us = max_strategy - baseline;
        Some(OverheadAnnotation {
            absolute_us,
            percent: absolute_us / max_strategy * 100.0,
        })
    }
}

/// Collect the overhead buckets for this experiment.
///
/// Returns `None` when nothing matches the experiment marker (a
/// soft-skip). A bucket measured by more than one method keeps the last
/// record seen.
pub fn gather(records: &[BenchmarkRecord]) -> Option<OverheadBuckets> {
    let mut by_bucket = BTreeMap::new();

    for record in records.iter().filter(|r| r.is_experiment(EXPERIMENT_MARKER)) {
        let method = record.method_name();
        let Some(bucket) = OverheadBucket::classify(method) else {
            tracing::debug!(method, "dropping unclassified overhead method");
            continue;
        };
        by_bucket.insert(bucket, record.primary_metric.score * MILLIS_TO_MICROS);
    }

    if by_bucket.is_empty() {
        None
    } else {
        Some(OverheadBuckets { by_bucket })
    }
}

/// Render the selection overhead bar chart into `out_dir`.
pub fn build_chart(
    buckets: &OverheadBuckets,
    backend: &dyn ChartBackend,
    out_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let note = buckets.vs_baseline().map(|annotation| {
        format!(
            "Selection overhead: ~{:.1} µs ({:.2}% of total)",
            annotation.absolute_us, annotation.percent
        )
    });

    let chart = BarChart {
        title: "Selection Strategy Overhead (connection acquisition + PING)".to_string(),
        y_desc: "Latency (µs)".to_string(),
        bars: buckets
            .buckets()
            .map(|(bucket, value)| Bar {
                label: bucket.display_label().to_string(),
                value,
            })
            .collect(),
        value_suffix: " µs".to_string(),
        note,
    };

    let path = out_dir.join(format!("{ARTIFACT_STEM}.{}", backend.extension()));
    backend.draw_bar_chart(&chart, &path)?;
    tracing::info!(path = %path.display(), "generated selection overhead chart");
    Ok(path)
}
