// Copyright 2025 Redis Laned Contributors
// SPDX-License-Identifier: Apache-2.0

//! HOL blocking impact report.
//!
//! Groups `HolImpactBenchmark` records by lane count and plots the
//! p50/p95/p99 latency series across the lane sweep, annotated with the
//! p95 drop between the first two lane counts (the single-lane to
//! multi-lane transition).

use lanechart_core::{BenchmarkRecord, PercentileSet};
use lanechart_render::{Callout, ChartBackend, LabeledSeries, LineChart, RenderError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Benchmark identifier marker selecting this experiment's records.
pub const EXPERIMENT_MARKER: &str = "HolImpactBenchmark";

const ARTIFACT_STEM: &str = "hol_impact";

/// Percentile summaries keyed by lane count, iterated ascending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaneSeries {
    by_lane: BTreeMap<u32, PercentileSet>,
}

impl LaneSeries {
    /// Lane counts in ascending order.
    pub fn lane_counts(&self) -> Vec<u32> {
        self.by_lane.keys().copied().collect()
    }

    /// Number of lane-count data points.
    pub fn len(&self) -> usize {
        self.by_lane.len()
    }

    /// Whether the series holds no data points.
    pub fn is_empty(&self) -> bool {
        self.by_lane.is_empty()
    }

    /// The percentile summary measured at `lane`, if any.
    pub fn get(&self, lane: u32) -> Option<&PercentileSet> {
        self.by_lane.get(&lane)
    }

    /// Percentage drop in p95 between the first two lane counts.
    ///
    /// `None` with fewer than two data points, or when the first p95 is
    /// zero and the quotient would be undefined.
    pub fn p95_improvement_percent(&self) -> Option<f64> {
        let p95 = self.percentile_values(|p| p.p95);
        if p95.len() < 2 || p95[0] == 0.0 {
            return None;
        }
        Some((p95[0] - p95[1]) / p95[0] * 100.0)
    }

    fn percentile_values(&self, pick: impl Fn(&PercentileSet) -> f64) -> Vec<f64> {
        self.by_lane.values().map(pick).collect()
    }
}

/// Collect the lane-count series for this experiment.
///
/// Returns `None` when nothing matches the experiment marker; callers
/// treat that as a soft-skip. Matching records without a parseable
/// `laneCount` parameter cannot be grouped and are dropped. A lane
/// count measured more than once keeps the last record seen.
pub fn gather(records: &[BenchmarkRecord]) -> Option<LaneSeries> {
    let mut by_lane = BTreeMap::new();

    for record in records.iter().filter(|r| r.is_experiment(EXPERIMENT_MARKER)) {
        let Some(lane) = record.lane_count() else {
            tracing::debug!(benchmark = %record.benchmark, "dropping record without lane count");
            continue;
        };
        by_lane.insert(lane, PercentileSet::from_record(record));
    }

    if by_lane.is_empty() {
        None
    } else {
        Some(LaneSeries { by_lane })
    }
}

/// Render the HOL impact line chart into `out_dir`.
pub fn build_chart(
    series: &LaneSeries,
    backend: &dyn ChartBackend,
    out_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let callout = series.p95_improvement_percent().map(|percent| Callout {
        text: format!("{percent:.0}% p95 improvement"),
        x_index: 1,
        y: series.percentile_values(|p| p.p95)[1],
    });

    let chart = LineChart {
        title: "HOL Blocking Impact: Single-Lane vs Multi-Lane (lower is better)".to_string(),
        x_desc: "Lane Count".to_string(),
        y_desc: "Latency (ms)".to_string(),
        x_ticks: series.lane_counts().iter().map(|l| l.to_string()).collect(),
        series: vec![
            LabeledSeries {
                label: "p50 (median)".to_string(),
                points: series.percentile_values(|p| p.p50),
            },
            LabeledSeries {
                label: "p95".to_string(),
                points: series.percentile_values(|p| p.p95),
            },
            LabeledSeries {
                label: "p99".to_string(),
                points: series.percentile_values(|p| p.p99),
            },
        ],
        callout,
    };

    let path = out_dir.join(format!("{ARTIFACT_STEM}.{}", backend.extension()));
    backend.draw_line_chart(&chart, &path)?;
    tracing::info!(path = %path.display(), "generated HOL impact chart");
    Ok(path)
}
