//! Evaluation executor
//!
//! Runs the probes in their fixed order against one scoring capability,
//! folds their results into a single collection and builds the report.

use std::time::Duration;

use anyhow::Result;
use sdr_core::ScoringClient;
use tokio_util::sync::CancellationToken;

use super::{CallHarness, EvalConfig};
use crate::catalog::{TestCatalog, load_catalog};
use crate::probes::{Probe, ProbeContext, default_probes};
use crate::report::EvaluationReport;
use crate::result::{Category, EvaluationResult};

/// Callback for progress updates during evaluation
pub type ProgressCallback = Box<dyn Fn(EvalProgress) + Send + Sync>;

/// Progress update during evaluation
#[derive(Debug, Clone)]
pub struct EvalProgress {
    /// Probe about to run
    pub probe: String,
    pub category: Category,
    /// Index of the probe among the selected ones (0-based)
    pub index: usize,
    /// Number of selected probes
    pub total: usize,
    /// Status message
    pub message: String,
}

/// Executor for running evaluation probes
pub struct EvalExecutor {
    config: EvalConfig,
    catalog: TestCatalog,
    probes: Vec<Box<dyn Probe>>,
    progress_callback: Option<ProgressCallback>,
    /// Model name recorded in the report
    model: String,
}

impl EvalExecutor {
    /// Create an executor; loads the configured catalog file if any
    pub fn new(config: EvalConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => TestCatalog::builtin(),
        };
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create with an explicit catalog
    pub fn with_catalog(config: EvalConfig, catalog: TestCatalog) -> Self {
        Self {
            config,
            catalog,
            probes: default_probes(),
            progress_callback: None,
            model: String::new(),
        }
    }

    /// Record the model name in produced reports
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set progress callback
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TestCatalog {
        &self.catalog
    }

    fn emit_progress(&self, progress: EvalProgress) {
        if let Some(ref callback) = self.progress_callback {
            callback(progress);
        }
    }

    /// Run the selected probes and build the report without exporting it
    pub async fn evaluate(
        &self,
        client: &dyn ScoringClient,
        cancel: CancellationToken,
    ) -> EvaluationReport {
        let ctx = ProbeContext {
            harness: CallHarness::new(
                client,
                Duration::from_secs(self.config.request_timeout_secs),
                cancel.clone(),
            ),
            catalog: &self.catalog,
            config: &self.config,
        };

        let selected: Vec<&dyn Probe> = self
            .probes
            .iter()
            .map(|p| &**p)
            .filter(|p| self.config.includes(p.category()))
            .collect();
        let total = selected.len();

        tracing::info!(
            probes = total,
            fixtures = self.catalog.fixture_count(),
            "Starting evaluation run"
        );

        let mut results: Vec<EvaluationResult> = Vec::new();
        for (index, probe) in selected.into_iter().enumerate() {
            if cancel.is_cancelled() {
                break;
            }

            self.emit_progress(EvalProgress {
                probe: probe.name().to_string(),
                category: probe.category(),
                index,
                total,
                message: format!("Running {} ({}/{})", probe.name(), index + 1, total),
            });

            let probe_results = probe.run(&ctx).await;
            let passed = probe_results.iter().filter(|r| r.success()).count();
            tracing::info!(
                probe = probe.name(),
                results = probe_results.len(),
                passed,
                "Probe finished"
            );
            results.extend(probe_results);
        }

        let cancelled = cancel.is_cancelled();
        if cancelled {
            tracing::warn!(results = results.len(), "Evaluation cancelled, reporting partial results");
        }

        let report = EvaluationReport::build(results, self.model.clone(), cancelled);
        tracing::info!(
            tests_run = report.tests_run,
            success_rate = report.overall_success_rate,
            critical_issues = report.summary.critical_issues.len(),
            "Evaluation run complete"
        );
        report
    }

    /// Run the evaluation and export the report when configured to
    pub async fn run(
        &self,
        client: &dyn ScoringClient,
        cancel: CancellationToken,
    ) -> Result<EvaluationReport> {
        let report = self.evaluate(client, cancel).await;
        if self.config.save_results {
            report.write_json(&self.config.output_path).await?;
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use sdr_core::{GeneratedMessage, MockScoringClient, ScoreResult};

    use super::*;

    fn steady_client() -> MockScoringClient {
        let mut client = MockScoringClient::new();
        client
            .expect_score()
            .returning(|_| Ok(ScoreResult::new(50.0, "")));
        client
            .expect_generate_message()
            .returning(|_, _| Ok(GeneratedMessage::new("Hi", "Hello")));
        client
    }

    #[tokio::test]
    async fn test_category_filter() {
        let config = EvalConfig::default()
            .with_categories(vec![Category::Security])
            .without_save();
        let executor = EvalExecutor::with_catalog(config, TestCatalog::builtin());

        let report = executor
            .evaluate(&steady_client(), CancellationToken::new())
            .await;

        assert_eq!(report.tests_run, 2);
        assert!(report
            .detailed_results
            .iter()
            .all(|r| r.category() == Category::Security));
    }

    #[tokio::test]
    async fn test_progress_follows_probe_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let mut executor =
            EvalExecutor::with_catalog(EvalConfig::default().without_save(), TestCatalog::builtin());
        executor.set_progress_callback(Box::new(move |p| {
            sink.lock().unwrap().push(p.category);
        }));

        executor
            .evaluate(&steady_client(), CancellationToken::new())
            .await;

        assert_eq!(seen.lock().unwrap().as_slice(), Category::all());
    }

    #[tokio::test]
    async fn test_cancelled_run_issues_no_calls() {
        let mut client = MockScoringClient::new();
        client.expect_score().never();
        client.expect_generate_message().never();

        let cancel = CancellationToken::new();
        cancel.cancel();

        let executor =
            EvalExecutor::with_catalog(EvalConfig::default().without_save(), TestCatalog::builtin())
                .with_model("grok-3");
        let report = executor.evaluate(&client, cancel).await;

        assert!(report.cancelled);
        assert_eq!(report.tests_run, 0);
        assert_eq!(report.model, "grok-3");
    }

    #[tokio::test]
    async fn test_run_exports_report() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("evaluation_report.json");
        let config = EvalConfig::default()
            .with_categories(vec![Category::Robustness])
            .with_output_path(output.clone());

        let executor = EvalExecutor::with_catalog(config, TestCatalog::builtin());
        let report = executor
            .run(&steady_client(), CancellationToken::new())
            .await
            .unwrap();

        let loaded = EvaluationReport::read_json(&output).await.unwrap();
        assert_eq!(loaded.tests_run, report.tests_run);
    }
}
