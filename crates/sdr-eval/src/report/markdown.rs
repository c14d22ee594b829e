//! Markdown report generation

use anyhow::Result;

use super::EvaluationReport;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Generate a Markdown report
    pub fn generate(report: &EvaluationReport) -> Result<String> {
        let mut md = String::new();

        md.push_str("# Lead Scoring Evaluation Report\n\n");

        md.push_str("## Overview\n\n");
        md.push_str(&format!("- **Run**: {}\n", report.run_id));
        if !report.model.is_empty() {
            md.push_str(&format!("- **Model**: {}\n", report.model));
        }
        md.push_str(&format!(
            "- **Timestamp**: {}\n",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        md.push_str(&format!("- **Tests Run**: {}\n", report.tests_run));
        md.push_str(&format!(
            "- **Overall Success Rate**: {:.1}%\n",
            report.overall_success_rate
        ));
        if report.cancelled {
            md.push_str("- **Status**: cancelled (partial results)\n");
        }
        md.push('\n');

        md.push_str("## Results by Category\n\n");
        md.push_str("| Category | Tests | Passed | Rate | Avg Score | Avg Time |\n");
        md.push_str("|----------|-------|--------|------|-----------|----------|\n");
        for summary in report.summary.category_performance.values() {
            md.push_str(&format!(
                "| {} | {} | {} | {:.1}% | {:.1} | {:.2}s |\n",
                summary.category.display_name(),
                summary.total,
                summary.successful,
                summary.success_rate,
                summary.avg_score,
                summary.avg_time
            ));
        }
        md.push('\n');

        if !report.summary.critical_issues.is_empty() {
            md.push_str("## Critical Issues\n\n");
            for issue in &report.summary.critical_issues {
                md.push_str(&format!("- ⚠️ {}\n", issue));
            }
            md.push('\n');
        }

        if !report.recommendations.is_empty() {
            md.push_str("## Recommendations\n\n");
            for (i, rec) in report.recommendations.iter().enumerate() {
                md.push_str(&format!("### {}. [{}] {}\n\n", i + 1, rec.priority, rec.area));
                md.push_str(&format!("- **Issue**: {}\n", rec.issue));
                md.push_str(&format!("- **Fix**: {}\n", rec.recommendation));
                md.push_str(&format!("- **Prompt**: {}\n\n", rec.prompt_improvement));
            }
        }

        md.push_str("## Test Results\n\n");
        md.push_str("| Test | Category | Status | Score | Time |\n");
        md.push_str("|------|----------|--------|-------|------|\n");
        for result in &report.detailed_results {
            md.push_str(&format!(
                "| {} | {} | {} | {:.1} | {:.2}s |\n",
                result.test_name().replace('|', "\\|"),
                result.category().display_name(),
                if result.success() { "✅" } else { "❌" },
                result.score(),
                result.execution_time()
            ));
        }
        md.push('\n');

        let failed: Vec<_> = report
            .detailed_results
            .iter()
            .filter(|r| !r.success() && !r.recommendations().is_empty())
            .collect();
        if !failed.is_empty() {
            md.push_str("## Failed Test Suggestions\n\n");
            for result in failed {
                md.push_str(&format!("### {}\n\n", result.test_name()));
                for suggestion in result.recommendations() {
                    md.push_str(&format!("- {}\n", suggestion));
                }
                md.push('\n');
            }
        }

        Ok(md)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Category, EvaluationResult};

    #[test]
    fn test_markdown_generation() {
        let results = vec![
            EvaluationResult::new("Edge Case - missing_data", Category::Robustness, false, 0.0)
                .with_recommendations(vec!["Implement default values for missing fields".into()]),
            EvaluationResult::new("Edge Case - long_strings", Category::Robustness, true, 100.0),
        ];
        let report = EvaluationReport::build(results, "grok-3", false);
        let md = MarkdownReporter::generate(&report).unwrap();

        assert!(md.contains("# Lead Scoring Evaluation Report"));
        assert!(md.contains("| Robustness | 2 | 1 | 50.0% |"));
        assert!(md.contains("[HIGH] Edge Case Handling"));
        assert!(md.contains("RELIABILITY"));
        assert!(md.contains("- Implement default values for missing fields"));
    }
}
