//! Report generation for evaluation results
//!
//! Builds the [`EvaluationReport`] artifact and renders it as JSON,
//! Markdown or a terminal table.

mod evaluation;
mod json;
mod markdown;

pub use evaluation::EvaluationReport;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

use anyhow::Result;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    Json,
    Markdown,
    #[default]
    Table,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "table" => Ok(ReportFormat::Table),
            other => Err(format!("unknown report format '{}' (json, markdown, table)", other)),
        }
    }
}

/// Generate a report in the specified format
pub fn generate_report(report: &EvaluationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => JsonReporter::generate(report),
        ReportFormat::Markdown => MarkdownReporter::generate(report),
        ReportFormat::Table => Ok(generate_table(report)),
    }
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() > width {
        let head: String = name.chars().take(width - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// Generate a simple table report for terminal output
fn generate_table(report: &EvaluationReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{:=<78}\n", "= Lead Scoring Evaluation Results "));
    if !report.model.is_empty() {
        output.push_str(&format!("Model: {} | ", report.model));
    }
    output.push_str(&format!("Run: {}\n", report.run_id));
    output.push_str(&format!(
        "Timestamp: {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("{:=<78}\n\n", ""));

    output.push_str("SUMMARY\n");
    output.push_str(&format!("{:-<78}\n", ""));
    output.push_str(&format!("Tests Run: {}\n", report.tests_run));
    output.push_str(&format!(
        "Overall Success Rate: {:.1}%\n",
        report.overall_success_rate
    ));
    if report.cancelled {
        output.push_str("Status: CANCELLED (partial results)\n");
    }
    output.push('\n');

    output.push_str("BY CATEGORY\n");
    output.push_str(&format!("{:-<78}\n", ""));
    output.push_str(&format!(
        "{:<22} {:>7} {:>8} {:>9} {:>12} {:>10}\n",
        "Category", "Tests", "Passed", "Rate", "Avg Score", "Avg Time"
    ));
    output.push_str(&format!("{:-<78}\n", ""));
    for summary in report.summary.category_performance.values() {
        output.push_str(&format!(
            "{:<22} {:>7} {:>8} {:>8.1}% {:>12.1} {:>9.2}s\n",
            summary.category.display_name(),
            summary.total,
            summary.successful,
            summary.success_rate,
            summary.avg_score,
            summary.avg_time
        ));
    }
    output.push_str(&format!("{:-<78}\n\n", ""));

    if !report.summary.critical_issues.is_empty() {
        output.push_str("CRITICAL ISSUES\n");
        output.push_str(&format!("{:-<78}\n", ""));
        for issue in &report.summary.critical_issues {
            output.push_str(&format!("! {}\n", issue));
        }
        output.push('\n');
    }

    if !report.recommendations.is_empty() {
        output.push_str("RECOMMENDATIONS\n");
        output.push_str(&format!("{:-<78}\n", ""));
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. [{}] {}\n", i + 1, rec.priority, rec.area));
            output.push_str(&format!("   Issue: {}\n", rec.issue));
            output.push_str(&format!("   Fix: {}\n", rec.recommendation));
        }
        output.push('\n');
    }

    output.push_str("TEST RESULTS\n");
    output.push_str(&format!("{:-<78}\n", ""));
    output.push_str(&format!(
        "{:<48} {:>8} {:>10} {:>9}\n",
        "Test", "Status", "Score", "Time"
    ));
    output.push_str(&format!("{:-<78}\n", ""));
    for result in &report.detailed_results {
        output.push_str(&format!(
            "{:<48} {:>8} {:>10.1} {:>8.2}s\n",
            truncate(result.test_name(), 46),
            if result.success() { "PASS" } else { "FAIL" },
            result.score(),
            result.execution_time()
        ));
    }
    output.push_str(&format!("{:=<78}\n", ""));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Category, EvaluationResult};

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert!("html".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_table_truncates_long_names() {
        let long_name = format!("Scoring Consistency - {}", "é".repeat(60));
        let results = vec![EvaluationResult::new(long_name, Category::Scoring, true, 80.0)];
        let report = EvaluationReport::build(results, "grok-3", true);

        let table = generate_report(&report, ReportFormat::Table).unwrap();
        assert!(table.contains("Overall Success Rate: 100.0%"));
        assert!(table.contains("CANCELLED"));
        assert!(table.contains("..."));
        assert!(table.contains("Scoring"));
    }
}
