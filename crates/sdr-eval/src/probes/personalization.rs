//! Message personalization

use async_trait::async_trait;
use sdr_core::Lead;
use serde_json::{json, Map, Value};

use super::{Probe, ProbeContext};
use crate::catalog::{PersonalizationCase, PersonalizationElement};
use crate::recommend::per_result;
use crate::result::{Category, EvaluationResult};

/// Minimum personalization score for a passing message
pub const PASS_THRESHOLD: f64 = 75.0;

const VALUE_WORDS: &[&str] = &["increase", "improve", "reduce", "save", "help", "benefit"];
const CONTEXT_WORDS: &[&str] = &["previous", "earlier", "last", "follow"];
const URGENCY_WORDS: &[&str] = &["soon", "quickly", "now", "today", "this week"];
const TIME_WORDS: &[&str] = &[
    "minutes", "tomorrow", "tuesday", "wednesday", "thursday", "friday", "week",
];
const AGENDA_WORDS: &[&str] = &["discuss", "explore", "show", "demonstrate", "agenda"];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Whether `text` (already lowercased) exhibits `element` for `lead`
pub fn element_present(element: PersonalizationElement, lead: &Lead, text: &str) -> bool {
    match element {
        PersonalizationElement::FirstName => text.contains(&lead.first_name.to_lowercase()),
        PersonalizationElement::Company => text.contains(&lead.company.to_lowercase()),
        PersonalizationElement::JobTitle => {
            text.contains(&lead.job_title.to_lowercase()) || contains_any(text, &["role", "position"])
        }
        PersonalizationElement::ValueProposition => contains_any(text, VALUE_WORDS),
        PersonalizationElement::PreviousContext => contains_any(text, CONTEXT_WORDS),
        PersonalizationElement::Urgency => contains_any(text, URGENCY_WORDS),
        PersonalizationElement::SpecificTime => contains_any(text, TIME_WORDS),
        PersonalizationElement::ClearAgenda => contains_any(text, AGENDA_WORDS),
    }
}

/// Generates one message per fixture and checks required elements
pub struct PersonalizationProbe;

impl PersonalizationProbe {
    async fn run_case(
        &self,
        ctx: &ProbeContext<'_>,
        case: &PersonalizationCase,
    ) -> Option<EvaluationResult> {
        let test_name = format!(
            "Personalization - {} {}",
            case.lead.first_name, case.message_type
        );

        let outcome = ctx.harness.generate_message(&case.lead, case.message_type).await;
        if outcome.is_cancelled() {
            return None;
        }

        let message = match outcome.result {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(test = %test_name, error = %e, "Message generation failed");
                return Some(
                    EvaluationResult::new(test_name, Category::MessageGeneration, false, 0.0)
                        .with_execution_time(outcome.elapsed.as_secs_f64())
                        .with_details(json!({
                            "error": e.to_string(),
                            "message_type": case.message_type,
                        }))
                        .with_recommendations(vec![
                            "Verify message generation returns JSON with subject and content"
                                .to_string(),
                        ]),
                );
            }
        };

        let text = format!("{} {}", message.subject, message.content).to_lowercase();
        let mut checked = Map::new();
        let mut missing = Vec::new();
        for &element in &case.required_elements {
            let found = element_present(element, &case.lead, &text);
            checked.insert(element.as_str().to_string(), Value::Bool(found));
            if !found {
                missing.push(element);
            }
        }

        let total = case.required_elements.len();
        let matched = total - missing.len();
        let score = if total == 0 {
            0.0
        } else {
            100.0 * matched as f64 / total as f64
        };
        let success = score >= PASS_THRESHOLD;

        tracing::info!(test = %test_name, score, success, "Personalization fixture graded");

        Some(
            EvaluationResult::new(test_name, Category::MessageGeneration, success, score)
                .with_execution_time(outcome.elapsed.as_secs_f64())
                .with_details(json!({
                    "elements_checked": checked,
                    "message_type": case.message_type,
                    "message_length": message.content.chars().count(),
                }))
                .with_recommendations(per_result::personalization(&missing)),
        )
    }
}

#[async_trait]
impl Probe for PersonalizationProbe {
    fn category(&self) -> Category {
        Category::MessageGeneration
    }

    fn name(&self) -> &'static str {
        "Message Personalization"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> Vec<EvaluationResult> {
        let mut results = Vec::new();
        for case in &ctx.catalog.personalization {
            match self.run_case(ctx, case).await {
                Some(result) => results.push(result),
                None => break,
            }
        }
        results
    }
}
