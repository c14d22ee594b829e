//! Response time

use async_trait::async_trait;
use serde_json::json;

use super::stats::{max, mean, min};
use super::{Probe, ProbeContext};
use crate::recommend::per_result;
use crate::result::{Category, EvaluationResult};

/// Passing mean scoring time in seconds
pub const SCORING_TIME_LIMIT_SECS: f64 = 3.0;

/// Passing mean message-generation time in seconds
pub const MESSAGE_TIME_LIMIT_SECS: f64 = 5.0;

/// Times repeated calls against fixed synthetic leads
///
/// Failed calls are left out of the timing sample. The score is
/// `100 - 10 * mean` and is not clamped, so it goes negative past ten
/// seconds.
pub struct LatencyProbe;

struct Sample {
    times: Vec<f64>,
    failed_calls: u32,
    cancelled: bool,
}

fn grade(
    test_name: &str,
    sample: &Sample,
    limit: f64,
    recommend: fn(f64) -> Vec<String>,
) -> EvaluationResult {
    if sample.times.is_empty() {
        return EvaluationResult::new(test_name, Category::Performance, false, 0.0)
            .with_details(json!({
                "error": "all timed calls failed",
                "failed_calls": sample.failed_calls,
            }));
    }

    let avg = mean(&sample.times);
    EvaluationResult::new(test_name, Category::Performance, avg < limit, 100.0 - avg * 10.0)
        .with_execution_time(avg)
        .with_details(json!({
            "all_times": sample.times,
            "min_time": min(&sample.times),
            "max_time": max(&sample.times),
            "failed_calls": sample.failed_calls,
        }))
        .with_recommendations(recommend(avg))
}

impl LatencyProbe {
    async fn time_scoring(&self, ctx: &ProbeContext<'_>) -> Sample {
        let lead = &ctx.catalog.latency.scoring_lead;
        let mut sample = Sample { times: Vec::new(), failed_calls: 0, cancelled: false };

        for _ in 0..ctx.config.scoring_latency_calls {
            let outcome = ctx.harness.score(lead).await;
            if outcome.is_cancelled() {
                sample.cancelled = true;
                break;
            }
            match outcome.result {
                Ok(_) => sample.times.push(outcome.secs()),
                Err(_) => sample.failed_calls += 1,
            }
        }
        sample
    }

    async fn time_messages(&self, ctx: &ProbeContext<'_>) -> Sample {
        let latency = &ctx.catalog.latency;
        let mut sample = Sample { times: Vec::new(), failed_calls: 0, cancelled: false };

        for _ in 0..ctx.config.message_latency_calls {
            let outcome = ctx
                .harness
                .generate_message(&latency.message_lead, latency.message_type)
                .await;
            if outcome.is_cancelled() {
                sample.cancelled = true;
                break;
            }
            match outcome.result {
                Ok(_) => sample.times.push(outcome.secs()),
                Err(_) => sample.failed_calls += 1,
            }
        }
        sample
    }
}

#[async_trait]
impl Probe for LatencyProbe {
    fn category(&self) -> Category {
        Category::Performance
    }

    fn name(&self) -> &'static str {
        "Response Time"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> Vec<EvaluationResult> {
        let mut results = Vec::new();

        let scoring = self.time_scoring(ctx).await;
        if scoring.cancelled {
            return results;
        }
        let result = grade(
            "Average Scoring Response Time",
            &scoring,
            SCORING_TIME_LIMIT_SECS,
            per_result::scoring_latency,
        );
        tracing::info!(avg_secs = result.execution_time(), success = result.success(), "Scoring latency graded");
        results.push(result);

        let messages = self.time_messages(ctx).await;
        if messages.cancelled {
            return results;
        }
        let result = grade(
            "Average Message Generation Time",
            &messages,
            MESSAGE_TIME_LIMIT_SECS,
            per_result::message_latency,
        );
        tracing::info!(avg_secs = result.execution_time(), success = result.success(), "Message latency graded");
        results.push(result);

        results
    }
}
