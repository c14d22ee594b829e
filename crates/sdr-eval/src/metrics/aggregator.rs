//! Aggregation over a results collection

use std::collections::BTreeMap;

use super::types::{CategorySummary, CriticalIssue, EvaluationSummary};
use crate::probes::stats::mean;
use crate::result::{Category, EvaluationResult};

/// Share of results over this fraction scoring zero flags reliability
const ZERO_SCORE_SHARE: f64 = 0.3;

/// Execution time in seconds above which performance is flagged
const SLOW_CALL_SECS: f64 = 5.0;

/// Percentage of successful results; 0 for an empty collection
pub fn success_rate(results: &[EvaluationResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.success()).count();
    100.0 * passed as f64 / results.len() as f64
}

/// Aggregator for computing summaries from evaluation results
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsAggregator;

impl MetricsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate results into a summary
    pub fn aggregate(&self, results: &[EvaluationResult]) -> EvaluationSummary {
        EvaluationSummary {
            overall_success_rate: success_rate(results),
            category_performance: self.compute_category_summaries(results),
            total_tests: results.len() as u32,
            failed_tests: results
                .iter()
                .filter(|r| !r.success())
                .map(|r| r.test_name().to_string())
                .collect(),
            critical_issues: self.critical_issues(results),
        }
    }

    /// Per-category rollups for categories that produced results
    fn compute_category_summaries(
        &self,
        results: &[EvaluationResult],
    ) -> BTreeMap<String, CategorySummary> {
        let mut by_category: BTreeMap<Category, Vec<&EvaluationResult>> = BTreeMap::new();
        for result in results {
            by_category.entry(result.category()).or_default().push(result);
        }

        by_category
            .into_iter()
            .map(|(category, cat_results)| {
                let total = cat_results.len() as u32;
                let successful = cat_results.iter().filter(|r| r.success()).count() as u32;
                let scores: Vec<f64> = cat_results.iter().map(|r| r.score()).collect();
                let times: Vec<f64> = cat_results.iter().map(|r| r.execution_time()).collect();

                (
                    category.as_str().to_string(),
                    CategorySummary {
                        category,
                        total,
                        successful,
                        success_rate: 100.0 * successful as f64 / total as f64,
                        avg_score: mean(&scores),
                        avg_time: mean(&times),
                    },
                )
            })
            .collect()
    }

    /// Issues detected over the full result set
    pub fn critical_issues(&self, results: &[EvaluationResult]) -> Vec<CriticalIssue> {
        let mut issues = Vec::new();

        if results
            .iter()
            .any(|r| r.category() == Category::Security && !r.success())
        {
            issues.push(CriticalIssue::security());
        }

        let zero_scores = results.iter().filter(|r| r.score() == 0.0).count();
        if zero_scores as f64 > results.len() as f64 * ZERO_SCORE_SHARE {
            issues.push(CriticalIssue::reliability());
        }

        if results.iter().any(|r| r.execution_time() > SLOW_CALL_SECS) {
            issues.push(CriticalIssue::performance());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::IssueKind;

    fn result(name: &str, category: Category, success: bool, score: f64) -> EvaluationResult {
        EvaluationResult::new(name, category, success, score)
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(success_rate(&[]), 0.0);
        let results = vec![
            result("a", Category::Scoring, true, 80.0),
            result("b", Category::Scoring, false, 20.0),
            result("c", Category::Security, true, 100.0),
            result("d", Category::Security, true, 100.0),
        ];
        assert_eq!(success_rate(&results), 75.0);
    }

    #[test]
    fn test_category_rollup() {
        let results = vec![
            result("a", Category::Scoring, true, 80.0).with_execution_time(1.0),
            result("b", Category::Scoring, false, 40.0).with_execution_time(3.0),
            result("c", Category::Robustness, true, 100.0),
        ];

        let summary = MetricsAggregator::new().aggregate(&results);
        let scoring = &summary.category_performance["scoring"];
        assert_eq!(scoring.total, 2);
        assert_eq!(scoring.successful, 1);
        assert_eq!(scoring.success_rate, 50.0);
        assert_eq!(scoring.avg_score, 60.0);
        assert_eq!(scoring.avg_time, 2.0);
        assert!(!summary.category_performance.contains_key("security"));
        assert_eq!(summary.failed_tests, vec!["b".to_string()]);
    }

    #[test]
    fn test_critical_issues() {
        let results = vec![
            result("a", Category::Security, false, 0.0),
            result("b", Category::Scoring, true, 80.0).with_execution_time(6.0),
            result("c", Category::Scoring, true, 80.0),
        ];

        let summary = MetricsAggregator::new().aggregate(&results);
        // 1 of 3 zero scores is over 30%
        assert_eq!(summary.critical_issues.len(), 3);
        assert!(summary.has_issue(IssueKind::Security));
        assert!(summary.has_issue(IssueKind::Reliability));
        assert!(summary.has_issue(IssueKind::Performance));
    }

    #[test]
    fn test_reliability_threshold_is_strict() {
        let mut results: Vec<EvaluationResult> = (0..7)
            .map(|i| result(&format!("ok{i}"), Category::Scoring, true, 80.0))
            .collect();
        results.extend((0..3).map(|i| result(&format!("zero{i}"), Category::Robustness, false, 0.0)));

        // exactly 30% is not over the threshold
        let issues = MetricsAggregator::new().critical_issues(&results);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let results = vec![
            result("a", Category::Security, false, 0.0),
            result("b", Category::MessageGeneration, true, 75.0).with_execution_time(2.5),
        ];
        let aggregator = MetricsAggregator::new();
        assert_eq!(aggregator.aggregate(&results), aggregator.aggregate(&results));
    }
}
