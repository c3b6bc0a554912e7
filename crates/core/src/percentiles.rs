//! Percentile extraction.
//!
//! This module reduces a benchmark record's `scorePercentiles` mapping
//! to the fixed p50/p95/p99 summary the reports plot.

use crate::record::BenchmarkRecord;
use serde::{Deserialize, Serialize};

const P50_LABEL: &str = "50.0";
const P95_LABEL: &str = "95.0";
const P99_LABEL: &str = "99.0";

/// The p50/p95/p99 latency summary for one benchmark configuration.
///
/// Values carry the record's time unit (milliseconds for the laned
/// benchmark suite). A percentile absent from the source record is 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentileSet {
    /// Median latency.
    pub p50: f64,
    /// 95th percentile latency.
    pub p95: f64,
    /// 99th percentile latency.
    pub p99: f64,
}

impl PercentileSet {
    /// Extract the percentile summary from a record.
    ///
    /// Total: an empty or partial `scorePercentiles` mapping yields
    /// zeros for the missing entries, never an error.
    pub fn from_record(record: &BenchmarkRecord) -> Self {
        let lookup = |label: &str| {
            record
                .primary_metric
                .score_percentiles
                .get(label)
                .copied()
                .unwrap_or(0.0)
        };

        Self {
            p50: lookup(P50_LABEL),
            p95: lookup(P95_LABEL),
            p99: lookup(P99_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PrimaryMetric;
    use std::collections::BTreeMap;

    fn record_with_percentiles(percentiles: &[(&str, f64)]) -> BenchmarkRecord {
        BenchmarkRecord {
            benchmark: "a.b.HolImpactBenchmark.mixedWorkload".to_string(),
            params: BTreeMap::new(),
            primary_metric: PrimaryMetric {
                score: 1.0,
                score_percentiles: percentiles
                    .iter()
                    .map(|(label, value)| (label.to_string(), *value))
                    .collect(),
            },
        }
    }

    #[test]
    fn test_extracts_all_three_percentiles() {
        let record =
            record_with_percentiles(&[("50.0", 5.0), ("95.0", 100.0), ("99.0", 220.0)]);
        let set = PercentileSet::from_record(&record);
        assert_eq!(set.p50, 5.0);
        assert_eq!(set.p95, 100.0);
        assert_eq!(set.p99, 220.0);
    }

    #[test]
    fn test_empty_percentiles_yield_zeros() {
        let record = record_with_percentiles(&[]);
        let set = PercentileSet::from_record(&record);
        assert_eq!(set, PercentileSet::default());
    }

    #[test]
    fn test_missing_entries_default_to_zero() {
        let record = record_with_percentiles(&[("95.0", 12.5), ("99.9", 40.0)]);
        let set = PercentileSet::from_record(&record);
        assert_eq!(set.p50, 0.0);
        assert_eq!(set.p95, 12.5);
        assert_eq!(set.p99, 0.0);
    }
}
