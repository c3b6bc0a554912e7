//! Shared fixtures and the capture backend for report tests.

use lanechart_core::{BenchmarkRecord, PrimaryMetric};
use lanechart_render::{BarChart, ChartBackend, GroupedBarChart, LineChart, RenderError};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

pub fn record(
    benchmark: &str,
    params: &[(&str, &str)],
    score: f64,
    percentiles: &[(&str, f64)],
) -> BenchmarkRecord {
    BenchmarkRecord {
        benchmark: benchmark.to_string(),
        params: params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        primary_metric: PrimaryMetric {
            score,
            score_percentiles: percentiles
                .iter()
                .map(|(label, value)| (label.to_string(), *value))
                .collect(),
        },
    }
}

pub fn hol_record(lane: &str, p50: f64, p95: f64, p99: f64) -> BenchmarkRecord {
    record(
        "com.macstab.oss.redis.laned.benchmarks.hol.HolImpactBenchmark.mixedWorkload",
        &[("laneCount", lane)],
        0.0,
        &[("50.0", p50), ("95.0", p95), ("99.0", p99)],
    )
}

pub fn strategy_record(lane: &str, strategy: &str, p95: f64) -> BenchmarkRecord {
    record(
        "com.macstab.oss.redis.laned.benchmarks.strategy.StrategyComparisonBenchmark.contendedWorkload",
        &[("laneCount", lane), ("strategyName", strategy)],
        0.0,
        &[("95.0", p95)],
    )
}

pub fn overhead_record(method: &str, score_ms: f64) -> BenchmarkRecord {
    record(
        &format!("com.macstab.oss.redis.laned.benchmarks.overhead.SelectionOverheadBenchmark.{method}"),
        &[],
        score_ms,
        &[],
    )
}

/// Backend double that records the charts it is asked to draw instead
/// of rendering them.
#[derive(Default)]
pub struct CaptureBackend {
    pub line: RefCell<Option<(LineChart, PathBuf)>>,
    pub grouped: RefCell<Option<(GroupedBarChart, PathBuf)>>,
    pub bars: RefCell<Option<(BarChart, PathBuf)>>,
}

impl ChartBackend for CaptureBackend {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn draw_line_chart(&self, chart: &LineChart, path: &Path) -> Result<(), RenderError> {
        *self.line.borrow_mut() = Some((chart.clone(), path.to_path_buf()));
        Ok(())
    }

    fn draw_grouped_bar_chart(
        &self,
        chart: &GroupedBarChart,
        path: &Path,
    ) -> Result<(), RenderError> {
        *self.grouped.borrow_mut() = Some((chart.clone(), path.to_path_buf()));
        Ok(())
    }

    fn draw_bar_chart(&self, chart: &BarChart, path: &Path) -> Result<(), RenderError> {
        *self.bars.borrow_mut() = Some((chart.clone(), path.to_path_buf()));
        Ok(())
    }
}
