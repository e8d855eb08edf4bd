//! Scan result analysis
//!
//! Groups the outcomes of one scan by a caller-supplied key and computes
//! per-group status counts and percentages. NA outcomes are excluded from
//! both the buckets and the group denominator, so the four bucket
//! percentages of any non-empty group always sum to 100. Rounding is left to
//! the caller; percentages are raw `f64` values.

use crate::core::{ProbeResult, ProbeResultStatus, ScanResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One status bucket within a group: an absolute count plus its share of the
/// group total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedBucket {
    pub total: u64,
    pub percentage: f64,
}

/// Status breakdown for one group key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerSummary {
    pub id: String,
    pub healthy: AnalyzedBucket,
    pub unhealthy: AnalyzedBucket,
    pub warning: AnalyzedBucket,
    pub inconclusive: AnalyzedBucket,
}

pub struct ScannerResultAnalyzer;

impl ScannerResultAnalyzer {
    /// Partitions a scan's outcomes by `key` and summarizes each partition.
    /// Summaries are returned sorted by group id. An empty scan yields an
    /// empty list.
    pub fn analyze<F>(result: &ScanResult, key: F) -> Vec<AnalyzerSummary>
    where
        F: Fn(&ProbeResult) -> String,
    {
        let mut groups: BTreeMap<String, StatusCounts> = BTreeMap::new();

        for probe_result in &result.results {
            let counts = groups.entry(key(probe_result)).or_default();
            match probe_result.status {
                ProbeResultStatus::Healthy => counts.healthy += 1,
                ProbeResultStatus::Unhealthy => counts.unhealthy += 1,
                ProbeResultStatus::Warning => counts.warning += 1,
                ProbeResultStatus::Inconclusive => counts.inconclusive += 1,
                ProbeResultStatus::NotApplicable => {}
            }
        }

        groups
            .into_iter()
            .map(|(id, counts)| counts.into_summary(id))
            .collect()
    }
}

#[derive(Default)]
struct StatusCounts {
    healthy: u64,
    unhealthy: u64,
    warning: u64,
    inconclusive: u64,
}

impl StatusCounts {
    fn into_summary(self, id: String) -> AnalyzerSummary {
        let total = self.healthy + self.unhealthy + self.warning + self.inconclusive;
        let bucket = |count: u64| AnalyzedBucket {
            total: count,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            },
        };

        AnalyzerSummary {
            id,
            healthy: bucket(self.healthy),
            unhealthy: bucket(self.unhealthy),
            warning: bucket(self.warning),
            inconclusive: bucket(self.inconclusive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComponentType, ProbeResult};

    fn result_with(status: ProbeResultStatus) -> ProbeResult {
        ProbeResult::new(
            "node0",
            "queue-a",
            ComponentType::Queue,
            "probe-under-test",
            "Probe Under Test",
            status,
        )
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let scan = ScanResult::new(
            "test-scanner",
            vec![
                result_with(ProbeResultStatus::Healthy),
                result_with(ProbeResultStatus::Healthy),
                result_with(ProbeResultStatus::Unhealthy),
                result_with(ProbeResultStatus::Warning),
                result_with(ProbeResultStatus::Inconclusive),
            ],
        );

        let summaries = ScannerResultAnalyzer::analyze(&scan, |r| r.probe_id.clone());
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        let sum = summary.healthy.percentage
            + summary.unhealthy.percentage
            + summary.warning.percentage
            + summary.inconclusive.percentage;
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(summary.healthy.total, 2);
        assert!((summary.healthy.percentage - 40.0).abs() < 1e-9);
    }

    #[test]
    fn not_applicable_results_are_excluded_entirely() {
        let scan = ScanResult::new(
            "test-scanner",
            vec![
                result_with(ProbeResultStatus::Healthy),
                result_with(ProbeResultStatus::NotApplicable),
            ],
        );

        let summaries = ScannerResultAnalyzer::analyze(&scan, |r| r.probe_id.clone());
        assert_eq!(summaries[0].healthy.total, 1);
        assert!((summaries[0].healthy.percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn group_of_only_na_results_reports_all_zero_buckets() {
        let scan = ScanResult::new(
            "test-scanner",
            vec![result_with(ProbeResultStatus::NotApplicable)],
        );

        let summaries = ScannerResultAnalyzer::analyze(&scan, |r| r.probe_id.clone());
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        for bucket in [
            summary.healthy,
            summary.unhealthy,
            summary.warning,
            summary.inconclusive,
        ] {
            assert_eq!(bucket.total, 0);
            assert_eq!(bucket.percentage, 0.0);
        }
    }

    #[test]
    fn empty_scan_yields_empty_summary_list() {
        let scan = ScanResult::empty("test-scanner");
        let summaries = ScannerResultAnalyzer::analyze(&scan, |r| r.probe_id.clone());
        assert!(summaries.is_empty());
    }

    #[test]
    fn summaries_are_sorted_by_group_id() {
        let mut b = result_with(ProbeResultStatus::Healthy);
        b.probe_id = "b-probe".to_string();
        let mut a = result_with(ProbeResultStatus::Healthy);
        a.probe_id = "a-probe".to_string();

        let scan = ScanResult::new("test-scanner", vec![b, a]);
        let summaries = ScannerResultAnalyzer::analyze(&scan, |r| r.probe_id.clone());
        assert_eq!(summaries[0].id, "a-probe");
        assert_eq!(summaries[1].id, "b-probe");
    }
}
