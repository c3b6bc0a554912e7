//! Report orchestration.
//!
//! Loads the result file once, then runs the three report pipelines
//! sequentially and independently. A soft-skip or render failure in one
//! report never prevents the others from running; only load-time errors
//! abort the run.

use lanechart_core::{load_records, CoreError};
use lanechart_render::{ChartBackend, RenderError};
use lanechart_reports::{hol_impact, overhead, strategy};
use std::path::{Path, PathBuf};

/// Outcome of a single report pipeline.
#[derive(Debug)]
pub enum ReportStatus {
    /// The chart artifact was written.
    Generated(PathBuf),
    /// The report's filter matched no records; nothing was written.
    NoData,
    /// Rendering failed; the remaining reports still ran.
    Failed(RenderError),
}

/// Summary of one chart-generation run.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of benchmark records loaded from the input file.
    pub record_count: usize,
    /// Per-report outcome, in execution order.
    pub reports: Vec<(&'static str, ReportStatus)>,
}

impl RunSummary {
    /// Paths of the artifacts generated by this run.
    pub fn artifacts(&self) -> Vec<&Path> {
        self.reports
            .iter()
            .filter_map(|(_, status)| match status {
                ReportStatus::Generated(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }
}

/// Load `input` and run all three report pipelines.
///
/// Charts are written into the directory containing the input file,
/// overwriting prior artifacts. Only load failures are returned as
/// errors; per-report outcomes are captured in the summary.
pub fn execute(input: &Path, backend: &dyn ChartBackend) -> Result<RunSummary, CoreError> {
    let records = load_records(input)?;
    let out_dir = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let reports = vec![
        (
            "HOL impact",
            run_report(
                "HOL impact",
                || hol_impact::gather(&records),
                |series| hol_impact::build_chart(series, backend, out_dir),
            ),
        ),
        (
            "strategy comparison",
            run_report(
                "strategy comparison",
                || strategy::gather(&records),
                |matrix| strategy::build_chart(matrix, backend, out_dir),
            ),
        ),
        (
            "selection overhead",
            run_report(
                "selection overhead",
                || overhead::gather(&records),
                |buckets| overhead::build_chart(buckets, backend, out_dir),
            ),
        ),
    ];

    Ok(RunSummary {
        record_count: records.len(),
        reports,
    })
}

fn run_report<S>(
    name: &'static str,
    gather: impl FnOnce() -> Option<S>,
    build: impl FnOnce(&S) -> Result<PathBuf, RenderError>,
) -> ReportStatus {
    let Some(series) = gather() else {
        tracing::info!(report = name, "no matching benchmark records, skipping report");
        return ReportStatus::NoData;
    };

    match build(&series) {
        Ok(path) => ReportStatus::Generated(path),
        Err(err) => {
            tracing::warn!(report = name, %err, "report rendering failed");
            ReportStatus::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanechart_render::{ChartStyle, PlottersBackend};
    use std::fs;

    const HOL_ONLY: &str = r#"[
        {"benchmark": "com.macstab.oss.redis.laned.benchmarks.hol.HolImpactBenchmark.mixedWorkload",
         "params": {"laneCount": "1"},
         "primaryMetric": {"score": 5.2,
             "scorePercentiles": {"50.0": 5.0, "95.0": 100.0, "99.0": 200.0}}},
        {"benchmark": "com.macstab.oss.redis.laned.benchmarks.hol.HolImpactBenchmark.mixedWorkload",
         "params": {"laneCount": "4"},
         "primaryMetric": {"score": 2.1,
             "scorePercentiles": {"50.0": 2.0, "95.0": 10.0, "99.0": 30.0}}}
    ]"#;

    const ALL_EXPERIMENTS: &str = r#"[
        {"benchmark": "com.macstab.oss.redis.laned.benchmarks.hol.HolImpactBenchmark.mixedWorkload",
         "params": {"laneCount": "1"},
         "primaryMetric": {"score": 5.2,
             "scorePercentiles": {"50.0": 5.0, "95.0": 100.0, "99.0": 200.0}}},
        {"benchmark": "com.macstab.oss.redis.laned.benchmarks.hol.HolImpactBenchmark.mixedWorkload",
         "params": {"laneCount": "4"},
         "primaryMetric": {"score": 2.1,
             "scorePercentiles": {"50.0": 2.0, "95.0": 10.0, "99.0": 30.0}}},
        {"benchmark": "com.macstab.oss.redis.laned.benchmarks.strategy.StrategyComparisonBenchmark.contendedWorkload",
         "params": {"laneCount": "4", "strategyName": "ROUND_ROBIN"},
         "primaryMetric": {"score": 2.3, "scorePercentiles": {"95.0": 9.0}}},
        {"benchmark": "com.macstab.oss.redis.laned.benchmarks.strategy.StrategyComparisonBenchmark.contendedWorkload",
         "params": {"laneCount": "4", "strategyName": "LEAST_USED"},
         "primaryMetric": {"score": 2.0, "scorePercentiles": {"95.0": 7.5}}},
        {"benchmark": "com.macstab.oss.redis.laned.benchmarks.overhead.SelectionOverheadBenchmark.baseline",
         "primaryMetric": {"score": 0.05}},
        {"benchmark": "com.macstab.oss.redis.laned.benchmarks.overhead.SelectionOverheadBenchmark.roundRobinOverhead",
         "primaryMetric": {"score": 0.09}}
    ]"#;

    fn backend() -> PlottersBackend {
        PlottersBackend::new(ChartStyle::default())
    }

    fn write_results(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("results.json");
        fs::write(&path, content).expect("fixture should write");
        path
    }

    #[test]
    fn test_missing_input_fails_without_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("results.json");

        let err = execute(&input, &backend()).expect_err("execute should fail");
        assert!(matches!(err, CoreError::ResourceNotFound { .. }));
        assert!(!dir.path().join("hol_impact.svg").exists());
    }

    #[test]
    fn test_malformed_input_fails_without_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_results(&dir, "{not json");

        let err = execute(&input, &backend()).expect_err("execute should fail");
        assert!(matches!(err, CoreError::MalformedInput { .. }));
        assert!(!dir.path().join("hol_impact.svg").exists());
    }

    #[test]
    fn test_single_experiment_produces_one_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_results(&dir, HOL_ONLY);

        let summary = execute(&input, &backend()).expect("execute should succeed");
        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.artifacts().len(), 1);

        assert!(dir.path().join("hol_impact.svg").exists());
        assert!(!dir.path().join("strategy_comparison.svg").exists());
        assert!(!dir.path().join("selection_overhead.svg").exists());

        assert!(matches!(summary.reports[0].1, ReportStatus::Generated(_)));
        assert!(matches!(summary.reports[1].1, ReportStatus::NoData));
        assert!(matches!(summary.reports[2].1, ReportStatus::NoData));
    }

    #[test]
    fn test_all_experiments_produce_three_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_results(&dir, ALL_EXPERIMENTS);

        let summary = execute(&input, &backend()).expect("execute should succeed");
        assert_eq!(summary.artifacts().len(), 3);

        for name in [
            "hol_impact.svg",
            "strategy_comparison.svg",
            "selection_overhead.svg",
        ] {
            assert!(dir.path().join(name).exists(), "{name} should exist");
        }
    }

    #[test]
    fn test_empty_result_file_soft_skips_every_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_results(&dir, "[]");

        let summary = execute(&input, &backend()).expect("execute should succeed");
        assert_eq!(summary.record_count, 0);
        assert!(summary.artifacts().is_empty());
        assert!(summary
            .reports
            .iter()
            .all(|(_, status)| matches!(status, ReportStatus::NoData)));
    }
}
