//! Scoring consistency and calibration

use async_trait::async_trait;
use serde_json::json;

use super::stats::{mean, sample_std_dev};
use super::{Probe, ProbeContext};
use crate::catalog::ConsistencyCase;
use crate::recommend::per_result;
use crate::result::{Category, EvaluationResult};

/// Scores at or above this spread fail the stability check
pub const MAX_STD_DEV: f64 = 5.0;

/// Scores each fixture repeatedly and grades spread and calibration
pub struct ConsistencyProbe;

impl ConsistencyProbe {
    async fn run_case(
        &self,
        ctx: &ProbeContext<'_>,
        case: &ConsistencyCase,
    ) -> Option<EvaluationResult> {
        let test_name = format!("Scoring Consistency - {}", case.description);
        let mut scores = Vec::new();
        let mut times = Vec::new();
        let mut failed_calls = 0u32;
        let mut total_time = 0.0;

        for _ in 0..ctx.config.consistency_repeats {
            let outcome = ctx.harness.score(&case.lead).await;
            if outcome.is_cancelled() {
                return None;
            }
            total_time += outcome.secs();
            match &outcome.result {
                Ok(result) => {
                    scores.push(result.score);
                    times.push(outcome.secs());
                }
                Err(e) => {
                    failed_calls += 1;
                    tracing::warn!(fixture = %case.description, error = %e, "Skipping failed scoring sample");
                }
            }
        }

        if scores.is_empty() {
            return Some(
                EvaluationResult::new(test_name, Category::Scoring, false, 0.0)
                    .with_execution_time(total_time / f64::from(failed_calls.max(1)))
                    .with_details(json!({
                        "error": "no scores obtained",
                        "failed_calls": failed_calls,
                        "total_time": total_time,
                        "expected_range": case.expected_range,
                    }))
                    .with_recommendations(vec![
                        "Verify the scoring endpoint returns a numeric score field".to_string(),
                    ]),
            );
        }

        let avg = mean(&scores);
        let std_dev = sample_std_dev(&scores);
        let in_range = case.expected_range.contains(avg);
        let success = std_dev < MAX_STD_DEV && in_range;

        tracing::info!(
            fixture = %case.description,
            avg,
            std_dev,
            success,
            "Consistency fixture graded"
        );

        Some(
            // per-call latency; the repeated total stays in details
            EvaluationResult::new(test_name, Category::Scoring, success, avg.clamp(0.0, 100.0))
                .with_execution_time(mean(&times))
                .with_details(json!({
                    "scores": scores,
                    "standard_deviation": std_dev,
                    "average_score": avg,
                    "expected_range": case.expected_range,
                    "in_range": in_range,
                    "failed_calls": failed_calls,
                    "total_time": total_time,
                }))
                .with_recommendations(per_result::scoring(std_dev, in_range)),
        )
    }
}

#[async_trait]
impl Probe for ConsistencyProbe {
    fn category(&self) -> Category {
        Category::Scoring
    }

    fn name(&self) -> &'static str {
        "Scoring Consistency"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> Vec<EvaluationResult> {
        let mut results = Vec::new();
        for case in &ctx.catalog.consistency {
            match self.run_case(ctx, case).await {
                Some(result) => results.push(result),
                None => break,
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use sdr_core::{
        CapabilityError, GeneratedMessage, Lead, MessageType, MockScoringClient, ScoreResult,
        ScoringClient,
    };

    use super::*;
    use crate::catalog::TestCatalog;
    use crate::metrics::MetricsAggregator;
    use crate::probes::test_support::context;
    use crate::runner::EvalConfig;

    fn single_case_catalog() -> TestCatalog {
        let mut catalog = TestCatalog::builtin();
        catalog.consistency.truncate(1);
        catalog
    }

    #[tokio::test]
    async fn test_stable_in_range_scores_pass() {
        let mut client = MockScoringClient::new();
        client
            .expect_score()
            .times(3)
            .returning(|_| Ok(ScoreResult::new(80.0, "strong fit")));

        let catalog = single_case_catalog();
        let config = EvalConfig::default();
        let results = ConsistencyProbe.run(&context(&client, &catalog, &config)).await;

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert!(result.success());
        assert_eq!(result.score(), 80.0);
        assert_eq!(result.detail_f64("standard_deviation"), Some(0.0));
        assert!(result.recommendations().is_empty());
    }

    #[tokio::test]
    async fn test_std_dev_uses_exactly_the_sampled_scores() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut client = MockScoringClient::new();
        client.expect_score().returning(move |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Ok(ScoreResult::new([70.0, 80.0, 90.0][n % 3], ""))
        });

        let catalog = single_case_catalog();
        let config = EvalConfig::default();
        let results = ConsistencyProbe.run(&context(&client, &catalog, &config)).await;

        let result = &results[0];
        assert!((result.detail_f64("standard_deviation").unwrap() - 10.0).abs() < 1e-9);
        assert_eq!(result.detail_f64("average_score"), Some(80.0));
        // in range but unstable
        assert!(!result.success());
        assert_eq!(result.recommendations().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_samples_are_skipped() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut client = MockScoringClient::new();
        client.expect_score().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 1 {
                Err(CapabilityError::missing_field("score"))
            } else {
                Ok(ScoreResult::new(75.0, ""))
            }
        });

        let catalog = single_case_catalog();
        let config = EvalConfig::default();
        let results = ConsistencyProbe.run(&context(&client, &catalog, &config)).await;

        let result = &results[0];
        assert!(result.success());
        assert_eq!(result.details()["scores"], json!([75.0, 75.0]));
        assert_eq!(result.details()["failed_calls"], 1);
    }

    #[tokio::test]
    async fn test_no_samples_yields_explicit_failure() {
        let mut client = MockScoringClient::new();
        client
            .expect_score()
            .returning(|_| Err(CapabilityError::Http("connection refused".to_string())));

        let catalog = single_case_catalog();
        let config = EvalConfig::default();
        let results = ConsistencyProbe.run(&context(&client, &catalog, &config)).await;

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert!(!result.success());
        assert_eq!(result.score(), 0.0);
        assert_eq!(result.details()["error"], "no scores obtained");
        assert_eq!(result.details()["failed_calls"], 3);
    }

    #[tokio::test]
    async fn test_out_of_range_average_fails() {
        let mut client = MockScoringClient::new();
        client
            .expect_score()
            .returning(|_| Ok(ScoreResult::new(95.0, "")));

        let catalog = single_case_catalog();
        let config = EvalConfig::default();
        let results = ConsistencyProbe.run(&context(&client, &catalog, &config)).await;

        let result = &results[0];
        assert!(!result.success());
        assert_eq!(result.details()["in_range"], false);
        assert!(result.recommendations()[0].contains("Calibrate"));
    }

    struct SlowScorer;

    #[async_trait]
    impl ScoringClient for SlowScorer {
        async fn score(&self, _lead: &Lead) -> Result<ScoreResult, CapabilityError> {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok(ScoreResult::new(80.0, ""))
        }

        async fn generate_message(
            &self,
            _lead: &Lead,
            _message_type: MessageType,
        ) -> Result<GeneratedMessage, CapabilityError> {
            Ok(GeneratedMessage::new("Hi", "Hello"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_execution_time_is_per_call_mean() {
        let catalog = single_case_catalog();
        let config = EvalConfig::default();
        let results = ConsistencyProbe
            .run(&context(&SlowScorer, &catalog, &config))
            .await;

        let result = &results[0];
        assert!(result.success());
        assert!((result.execution_time() - 2.0).abs() < 0.1);
        assert!((result.detail_f64("total_time").unwrap() - 6.0).abs() < 0.1);

        // three normal-latency calls are not a slow operation
        assert!(MetricsAggregator::new().critical_issues(&results).is_empty());
    }
}
