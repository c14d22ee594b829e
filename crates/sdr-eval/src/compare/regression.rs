//! Regression detection for evaluation reports

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::report::EvaluationReport;

/// A detected regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub regression_type: RegressionType,
    pub description: String,
    pub baseline_value: String,
    pub current_value: String,
    /// Severity (0.0 - 1.0)
    pub severity: f64,
}

/// Type of regression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionType {
    /// Overall success rate dropped
    SuccessRateDecrease,
    /// A category's success rate dropped
    CategoryDecrease,
    /// Mean response time grew significantly
    LatencyIncrease,
    /// Previously passing test now fails
    TestRegression,
    /// Critical issue absent from the baseline
    NewCriticalIssue,
}

/// Regression detector configuration
#[derive(Debug, Clone)]
pub struct RegressionConfig {
    /// Allowed drop in success rate, in percentage points
    pub success_rate_threshold: f64,

    /// Allowed relative increase of mean performance time (0.50 = 50%)
    pub latency_threshold: f64,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            success_rate_threshold: 5.0,
            latency_threshold: 0.50,
        }
    }
}

/// Detector for finding regressions between evaluation runs
pub struct RegressionDetector {
    config: RegressionConfig,
}

impl RegressionDetector {
    pub fn new(config: RegressionConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(RegressionConfig::default())
    }

    /// Compare the current report against the baseline
    pub fn detect(&self, baseline: &EvaluationReport, current: &EvaluationReport) -> Vec<Regression> {
        let mut regressions = Vec::new();

        if let Some(reg) = self.check_success_rate(baseline, current) {
            regressions.push(reg);
        }
        regressions.extend(self.check_categories(baseline, current));
        if let Some(reg) = self.check_latency(baseline, current) {
            regressions.push(reg);
        }
        regressions.extend(self.check_test_regressions(baseline, current));
        regressions.extend(self.check_critical_issues(baseline, current));

        regressions
    }

    fn rate_drop(&self, baseline_rate: f64, current_rate: f64) -> Option<f64> {
        let drop = baseline_rate - current_rate;
        (drop > self.config.success_rate_threshold).then_some(drop)
    }

    fn check_success_rate(
        &self,
        baseline: &EvaluationReport,
        current: &EvaluationReport,
    ) -> Option<Regression> {
        let drop = self.rate_drop(baseline.overall_success_rate, current.overall_success_rate)?;
        Some(Regression {
            regression_type: RegressionType::SuccessRateDecrease,
            description: format!(
                "Success rate decreased from {:.1}% to {:.1}%",
                baseline.overall_success_rate, current.overall_success_rate
            ),
            baseline_value: format!("{:.1}%", baseline.overall_success_rate),
            current_value: format!("{:.1}%", current.overall_success_rate),
            severity: (drop / baseline.overall_success_rate.max(1.0)).min(1.0),
        })
    }

    fn check_categories(
        &self,
        baseline: &EvaluationReport,
        current: &EvaluationReport,
    ) -> Vec<Regression> {
        let mut regressions = Vec::new();

        for (name, base) in &baseline.summary.category_performance {
            let Some(curr) = current.summary.category_performance.get(name) else {
                continue;
            };
            if let Some(drop) = self.rate_drop(base.success_rate, curr.success_rate) {
                regressions.push(Regression {
                    regression_type: RegressionType::CategoryDecrease,
                    description: format!(
                        "{} success rate decreased from {:.1}% to {:.1}%",
                        base.category.display_name(),
                        base.success_rate,
                        curr.success_rate
                    ),
                    baseline_value: format!("{:.1}%", base.success_rate),
                    current_value: format!("{:.1}%", curr.success_rate),
                    severity: (drop / base.success_rate.max(1.0)).min(1.0),
                });
            }
        }

        regressions
    }

    fn check_latency(
        &self,
        baseline: &EvaluationReport,
        current: &EvaluationReport,
    ) -> Option<Regression> {
        let key = crate::result::Category::Performance.as_str();
        let baseline_time = baseline.summary.category_performance.get(key)?.avg_time;
        let current_time = current.summary.category_performance.get(key)?.avg_time;

        if baseline_time <= 0.0 {
            return None;
        }

        let increase = (current_time - baseline_time) / baseline_time;
        (increase > self.config.latency_threshold).then(|| Regression {
            regression_type: RegressionType::LatencyIncrease,
            description: format!("Mean response time increased by {:.1}%", increase * 100.0),
            baseline_value: format!("{:.2}s", baseline_time),
            current_value: format!("{:.2}s", current_time),
            severity: (increase / 2.0).min(1.0),
        })
    }

    fn check_test_regressions(
        &self,
        baseline: &EvaluationReport,
        current: &EvaluationReport,
    ) -> Vec<Regression> {
        let passed_before: HashSet<&str> = baseline
            .detailed_results
            .iter()
            .filter(|r| r.success())
            .map(|r| r.test_name())
            .collect();

        current
            .detailed_results
            .iter()
            .filter(|r| !r.success() && passed_before.contains(r.test_name()))
            .map(|r| Regression {
                regression_type: RegressionType::TestRegression,
                description: format!("Test '{}' regressed from pass to fail", r.test_name()),
                baseline_value: "pass".to_string(),
                current_value: "fail".to_string(),
                severity: 0.5,
            })
            .collect()
    }

    fn check_critical_issues(
        &self,
        baseline: &EvaluationReport,
        current: &EvaluationReport,
    ) -> Vec<Regression> {
        current
            .summary
            .critical_issues
            .iter()
            .filter(|issue| !baseline.summary.critical_issues.contains(issue))
            .map(|issue| Regression {
                regression_type: RegressionType::NewCriticalIssue,
                description: format!("New critical issue: {}", issue),
                baseline_value: "absent".to_string(),
                current_value: "present".to_string(),
                severity: 1.0,
            })
            .collect()
    }

    /// Human-readable list of regressions
    pub fn summarize(regressions: &[Regression]) -> String {
        if regressions.is_empty() {
            return "No regressions detected.".to_string();
        }

        let mut summary = format!("Found {} regression(s):\n", regressions.len());
        for (i, reg) in regressions.iter().enumerate() {
            summary.push_str(&format!(
                "  {}. [{:?}] {} (severity: {:.0}%)\n",
                i + 1,
                reg.regression_type,
                reg.description,
                reg.severity * 100.0
            ));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Category, EvaluationResult};

    fn report(results: Vec<EvaluationResult>) -> EvaluationReport {
        EvaluationReport::build(results, "grok-3", false)
    }

    fn passing() -> Vec<EvaluationResult> {
        vec![
            EvaluationResult::new("Edge Case - long_strings", Category::Robustness, true, 100.0),
            EvaluationResult::new(
                "Injection Resistance - Direct instruction injection",
                Category::Security,
                true,
                100.0,
            ),
        ]
    }

    #[test]
    fn test_no_regression_for_identical_runs() {
        let detector = RegressionDetector::with_defaults();
        assert!(detector.detect(&report(passing()), &report(passing())).is_empty());
    }

    #[test]
    fn test_security_regression() {
        let mut current = passing();
        current[1] = EvaluationResult::new(
            "Injection Resistance - Direct instruction injection",
            Category::Security,
            false,
            0.0,
        );

        let detector = RegressionDetector::with_defaults();
        let regressions = detector.detect(&report(passing()), &report(current));
        let types: Vec<RegressionType> = regressions.iter().map(|r| r.regression_type).collect();

        assert!(types.contains(&RegressionType::SuccessRateDecrease));
        assert!(types.contains(&RegressionType::CategoryDecrease));
        assert!(types.contains(&RegressionType::TestRegression));
        assert!(types.contains(&RegressionType::NewCriticalIssue));

        let summary = RegressionDetector::summarize(&regressions);
        assert!(summary.starts_with(&format!("Found {} regression(s)", regressions.len())));
        assert!(summary.contains("SECURITY"));
    }

    #[test]
    fn test_latency_regression() {
        let baseline = vec![
            EvaluationResult::new("Average Scoring Response Time", Category::Performance, true, 90.0)
                .with_execution_time(1.0),
        ];
        let current = vec![
            EvaluationResult::new("Average Scoring Response Time", Category::Performance, true, 80.0)
                .with_execution_time(2.0),
        ];

        let regressions =
            RegressionDetector::with_defaults().detect(&report(baseline), &report(current));
        assert_eq!(regressions.len(), 1);
        assert_eq!(regressions[0].regression_type, RegressionType::LatencyIncrease);
    }

    #[test]
    fn test_small_drop_is_tolerated() {
        let config = RegressionConfig {
            success_rate_threshold: 60.0,
            ..Default::default()
        };
        let mut current = passing();
        current[0] = EvaluationResult::new("Edge Case - long_strings", Category::Robustness, false, 40.0);

        let regressions = RegressionDetector::new(config).detect(&report(passing()), &report(current));
        // 50-point overall drop is under the threshold; the category fell 100
        assert!(!regressions
            .iter()
            .any(|r| r.regression_type == RegressionType::SuccessRateDecrease));
        assert!(regressions
            .iter()
            .any(|r| r.regression_type == RegressionType::CategoryDecrease));
    }
}
