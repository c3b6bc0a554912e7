// Copyright 2025 Redis Laned Contributors
// SPDX-License-Identifier: Apache-2.0

//! Strategy comparison report.
//!
//! Groups `StrategyComparisonBenchmark` records by lane count and
//! lane-selection strategy, then plots p95 latency as one bar cluster
//! per lane count with one bar per strategy.

use lanechart_core::{BenchmarkRecord, PercentileSet};
use lanechart_render::{ChartBackend, GroupedBarChart, LabeledSeries, RenderError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Benchmark identifier marker selecting this experiment's records.
pub const EXPERIMENT_MARKER: &str = "StrategyComparisonBenchmark";

const ARTIFACT_STEM: &str = "strategy_comparison";

/// Lane-selection strategy under comparison.
///
/// The chart has a fixed number of series, so this is a closed set:
/// records whose `strategyName` is not one of the recognized raw labels
/// are dropped during gathering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// Raw label `ROUND_ROBIN`.
    RoundRobin,
    /// Raw label `THREAD_AFFINITY`.
    ThreadAffinity,
    /// Raw label `LEAST_USED`.
    LeastUsed,
}

impl Strategy {
    /// All strategies in display order.
    pub const ALL: [Strategy; 3] = [
        Strategy::RoundRobin,
        Strategy::ThreadAffinity,
        Strategy::LeastUsed,
    ];

    /// Map a raw `strategyName` parameter value to a strategy.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "ROUND_ROBIN" => Some(Self::RoundRobin),
            "THREAD_AFFINITY" => Some(Self::ThreadAffinity),
            "LEAST_USED" => Some(Self::LeastUsed),
            _ => None,
        }
    }

    /// Human-facing label used in the chart legend.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::RoundRobin => "RoundRobin",
            Self::ThreadAffinity => "ThreadAffinity",
            Self::LeastUsed => "LeastUsed",
        }
    }
}

/// Percentile summaries keyed by lane count and strategy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrategyMatrix {
    by_lane: BTreeMap<u32, BTreeMap<Strategy, PercentileSet>>,
}

impl StrategyMatrix {
    /// Lane counts in ascending order.
    pub fn lane_counts(&self) -> Vec<u32> {
        self.by_lane.keys().copied().collect()
    }

    /// The percentile summary for `(lane, strategy)`, if measured.
    pub fn get(&self, lane: u32, strategy: Strategy) -> Option<&PercentileSet> {
        self.by_lane.get(&lane)?.get(&strategy)
    }

    /// The p95 value for `(lane, strategy)`, 0.0 when not measured so a
    /// missing combination renders as an empty slot in its cluster.
    pub fn p95(&self, lane: u32, strategy: Strategy) -> f64 {
        self.get(lane, strategy).map(|p| p.p95).unwrap_or(0.0)
    }
}

/// Collect the lane × strategy matrix for this experiment.
///
/// Returns `None` when nothing matches the experiment marker (a
/// soft-skip). Records without a parseable `laneCount` or with a
/// `strategyName` outside the recognized set are dropped.
pub fn gather(records: &[BenchmarkRecord]) -> Option<StrategyMatrix> {
    let mut by_lane: BTreeMap<u32, BTreeMap<Strategy, PercentileSet>> = BTreeMap::new();

    for record in records.iter().filter(|r| r.is_experiment(EXPERIMENT_MARKER)) {
        let (Some(lane), Some(raw)) = (record.lane_count(), record.strategy_param()) else {
            tracing::debug!(benchmark = %record.benchmark, "dropping record without lane or strategy");
            continue;
        };
        let Some(strategy) = Strategy::from_param(raw) else {
            tracing::debug!(strategy = raw, "dropping record with unrecognized strategy");
            continue;
        };
        by_lane
            .entry(lane)
            .or_default()
            .insert(strategy, PercentileSet::from_record(record));
    }

    if by_lane.is_empty() {
        None
    } else {
        Some(StrategyMatrix { by_lane })
    }
}

/// Render the strategy comparison clustered bar chart into `out_dir`.
pub fn build_chart(
    matrix: &StrategyMatrix,
    backend: &dyn ChartBackend,
    out_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let lanes = matrix.lane_counts();

    let chart = GroupedBarChart {
        title: "Strategy Comparison: p95 Latency Under HOL Blocking (lower is better)".to_string(),
        x_desc: "Lane Count".to_string(),
        y_desc: "p95 Latency (ms)".to_string(),
        clusters: lanes.iter().map(|lane| format!("{lane} lanes")).collect(),
        series: Strategy::ALL
            .iter()
            .map(|strategy| LabeledSeries {
                label: strategy.display_label().to_string(),
                points: lanes.iter().map(|lane| matrix.p95(*lane, *strategy)).collect(),
            })
            .collect(),
    };

    let path = out_dir.join(format!("{ARTIFACT_STEM}.{}", backend.extension()));
    backend.draw_grouped_bar_chart(&chart, &path)?;
    tracing::info!(path = %path.display(), "generated strategy comparison chart");
    Ok(path)
}
