//! The report artifact

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::{EvaluationSummary, MetricsAggregator};
use crate::recommend::{Recommendation, synthesize};
use crate::result::EvaluationResult;

/// Outcome of one evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub run_id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Model the capability was backed by, if known
    #[serde(default)]
    pub model: String,
    pub tests_run: u32,
    pub overall_success_rate: f64,
    pub detailed_results: Vec<EvaluationResult>,
    pub summary: EvaluationSummary,
    pub recommendations: Vec<Recommendation>,
    /// Set when the run was aborted; results cover only the probes that ran
    #[serde(default)]
    pub cancelled: bool,
}

impl EvaluationReport {
    /// Build the report from a finished (or cancelled) run
    pub fn build(results: Vec<EvaluationResult>, model: impl Into<String>, cancelled: bool) -> Self {
        let summary = MetricsAggregator::new().aggregate(&results);
        let recommendations = synthesize(&results);

        Self {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            model: model.into(),
            tests_run: results.len() as u32,
            overall_success_rate: summary.overall_success_rate,
            detailed_results: results,
            summary,
            recommendations,
            cancelled,
        }
    }

    /// Top `n` recommendations by priority
    pub fn top_recommendations(&self, n: usize) -> &[Recommendation] {
        &self.recommendations[..n.min(self.recommendations.len())]
    }

    /// Write the report as pretty JSON
    pub async fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create report directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write report: {:?}", path))?;

        tracing::info!(path = %path.display(), tests = self.tests_run, "Report exported");
        Ok(())
    }

    /// Read a report written by [`write_json`](Self::write_json)
    pub async fn read_json(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read report: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse report: {:?}", path))
    }
}
