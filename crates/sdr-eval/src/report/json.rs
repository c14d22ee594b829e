//! JSON report generation

use anyhow::Result;

use super::EvaluationReport;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Generate a JSON report
    pub fn generate(report: &EvaluationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Generate a compact JSON report (no pretty printing)
    pub fn generate_compact(report: &EvaluationReport) -> Result<String> {
        Ok(serde_json::to_string(report)?)
    }
}
