//! Malformed and unusual input handling

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Probe, ProbeContext};
use crate::recommend::per_result;
use crate::result::{Category, EvaluationResult};

/// Scores each edge-case lead once
///
/// Always emits one result per fixture, including when the capability
/// errors, times out or panics.
pub struct RobustnessProbe;

#[async_trait]
impl Probe for RobustnessProbe {
    fn category(&self) -> Category {
        Category::Robustness
    }

    fn name(&self) -> &'static str {
        "Edge Cases"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> Vec<EvaluationResult> {
        let mut results = Vec::new();

        for case in &ctx.catalog.edge_cases {
            let test_name = format!("Edge Case - {}", case.test_type);
            let outcome = ctx.harness.score(&case.lead).await;
            if outcome.is_cancelled() {
                break;
            }
            let elapsed = outcome.secs();

            let result = match outcome.result {
                Ok(response) => {
                    let handled = (0.0..=100.0).contains(&response.score);
                    let response = if handled {
                        serde_json::to_value(&response).unwrap_or(Value::Null)
                    } else {
                        Value::String("Failed".to_string())
                    };
                    EvaluationResult::new(
                        test_name,
                        Category::Robustness,
                        handled,
                        if handled { 100.0 } else { 0.0 },
                    )
                    .with_execution_time(elapsed)
                    .with_details(json!({
                        "test_type": case.test_type,
                        "response": response,
                    }))
                    .with_recommendations(per_result::edge_case(case.test_type, handled))
                }
                Err(e) => {
                    tracing::warn!(test_type = %case.test_type, error = %e, "Edge case call failed");
                    EvaluationResult::new(test_name, Category::Robustness, false, 0.0)
                        .with_execution_time(elapsed)
                        .with_details(json!({
                            "test_type": case.test_type,
                            "error": e.to_string(),
                        }))
                        .with_recommendations(per_result::edge_case_error(case.test_type))
                }
            };

            tracing::info!(test_type = %case.test_type, handled = result.success(), "Edge case graded");
            results.push(result);
        }

        results
    }
}
