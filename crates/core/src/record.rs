//! Benchmark record types.
//!
//! This module provides the canonical `BenchmarkRecord` struct mirroring
//! the subset of the JMH JSON result schema that the reports read. A
//! result file carries a superset of these fields; unknown fields are
//! ignored during deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JMH parameter name carrying the lane count under test.
pub const LANE_COUNT_PARAM: &str = "laneCount";

/// JMH parameter name carrying the lane-selection strategy label.
pub const STRATEGY_PARAM: &str = "strategyName";

/// One measured benchmark invocation.
///
/// The `benchmark` field is the fully qualified JMH identifier: the
/// benchmark class path with a trailing method name, separated by `.`
/// (e.g. `com.macstab.oss.redis.laned.benchmarks.overhead.SelectionOverheadBenchmark.baseline`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    /// Fully qualified benchmark identifier.
    pub benchmark: String,
    /// Benchmark parametrization, e.g. `laneCount`, `strategyName`.
    /// Absent in the file for unparameterized benchmarks.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    /// Primary measurement for this invocation.
    pub primary_metric: PrimaryMetric,
}

/// The primary measurement block of a benchmark record.
///
/// `score` is the scalar result in the benchmark's time unit
/// (milliseconds for the laned benchmark suite); `score_percentiles`
/// maps percentile labels such as `"95.0"` to values in the same unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryMetric {
    /// Scalar score in the benchmark's time unit.
    pub score: f64,
    /// Percentile label to value, e.g. `"50.0"`, `"95.0"`, `"99.0"`.
    #[serde(default)]
    pub score_percentiles: BTreeMap<String, f64>,
}

impl BenchmarkRecord {
    /// Whether this record belongs to the experiment identified by
    /// `marker` (substring match on the benchmark identifier).
    pub fn is_experiment(&self, marker: &str) -> bool {
        self.benchmark.contains(marker)
    }

    /// The trailing method-name component of the benchmark identifier.
    pub fn method_name(&self) -> &str {
        self.benchmark.rsplit('.').next().unwrap_or(&self.benchmark)
    }

    /// The lane count this record was measured with, if the parameter
    /// is present and parses as an integer.
    pub fn lane_count(&self) -> Option<u32> {
        self.params.get(LANE_COUNT_PARAM)?.parse().ok()
    }

    /// The raw lane-selection strategy label, if parameterized.
    pub fn strategy_param(&self) -> Option<&str> {
        self.params.get(STRATEGY_PARAM).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(benchmark: &str, params: &[(&str, &str)]) -> BenchmarkRecord {
        BenchmarkRecord {
            benchmark: benchmark.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            primary_metric: PrimaryMetric {
                score: 0.0,
                score_percentiles: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn test_method_name_is_trailing_component() {
        let record = record(
            "com.macstab.oss.redis.laned.benchmarks.overhead.SelectionOverheadBenchmark.baseline",
            &[],
        );
        assert_eq!(record.method_name(), "baseline");
    }

    #[test]
    fn test_method_name_without_separator() {
        let record = record("standalone", &[]);
        assert_eq!(record.method_name(), "standalone");
    }

    #[test]
    fn test_is_experiment_matches_substring() {
        let record = record("a.b.HolImpactBenchmark.mixedWorkload", &[]);
        assert!(record.is_experiment("HolImpactBenchmark"));
        assert!(!record.is_experiment("StrategyComparisonBenchmark"));
    }

    #[test]
    fn test_lane_count_parses_param() {
        let record = record("a.b.HolImpactBenchmark.mixedWorkload", &[("laneCount", "16")]);
        assert_eq!(record.lane_count(), Some(16));
    }

    #[test]
    fn test_lane_count_missing_or_unparseable() {
        assert_eq!(record("a.b", &[]).lane_count(), None);
        assert_eq!(record("a.b", &[("laneCount", "many")]).lane_count(), None);
    }

    #[test]
    fn test_deserializes_jmh_record_with_extra_fields() {
        let json = r#"{
            "jmhVersion": "1.37",
            "benchmark": "com.macstab.oss.redis.laned.benchmarks.hol.HolImpactBenchmark.mixedWorkload",
            "mode": "sample",
            "threads": 8,
            "params": {"laneCount": "4"},
            "primaryMetric": {
                "score": 2.31,
                "scoreError": 0.12,
                "scoreUnit": "ms/op",
                "scorePercentiles": {"50.0": 2.0, "95.0": 9.8, "99.0": 27.4}
            },
            "secondaryMetrics": {}
        }"#;

        let record: BenchmarkRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(record.lane_count(), Some(4));
        assert_eq!(record.primary_metric.score, 2.31);
        assert_eq!(
            record.primary_metric.score_percentiles.get("95.0"),
            Some(&9.8)
        );
    }

    #[test]
    fn test_deserializes_record_without_params() {
        let json = r#"{
            "benchmark": "x.SelectionOverheadBenchmark.baseline",
            "primaryMetric": {"score": 0.08}
        }"#;

        let record: BenchmarkRecord = serde_json::from_str(json).expect("record should parse");
        assert!(record.params.is_empty());
        assert!(record.primary_metric.score_percentiles.is_empty());
    }
}
