//! [`ScoringClient`] backed by the Grok chat-completions API

use async_trait::async_trait;
use serde_json::json;

use super::client::GrokClient;
use super::parser::{parse_message, parse_score};
use crate::capability::{GeneratedMessage, MessageType, ScoreResult, ScoringClient};
use crate::error::CapabilityError;
use crate::lead::Lead;

const SCORING_SYSTEM_PROMPT: &str = "You are an expert sales lead qualification AI. \
Score leads from 0-100 based on:
1. Job title relevance and decision-making power
2. Company size and growth potential
3. Industry fit
4. Geographic location
5. Overall fit with ideal customer profile

Return a JSON object with:
- score: number between 0-100
- reasoning: brief explanation (2-3 sentences)
- strengths: array of positive factors
- weaknesses: array of limiting factors
- recommended_action: \"high_priority\", \"medium_priority\", \"low_priority\", or \"disqualify\"";

const PRODUCT_PITCH: &str = "Our product is an AI-powered sales automation platform that helps teams:
- Qualify leads 3x faster
- Increase conversion rates by 40%
- Automate repetitive sales tasks
- Provide data-driven insights";

/// Ideal customer profile used in the scoring prompt
fn scoring_criteria() -> serde_json::Value {
    json!({
        "target_industries": ["Technology", "Finance", "Healthcare", "SaaS", "Enterprise Software"],
        "target_titles": ["CEO", "CTO", "VP", "Director", "Head of", "Manager"],
        "ideal_company_size": "50-500 employees",
        "location_preference": "North America"
    })
}

fn message_system_prompt(message_type: MessageType) -> String {
    format!(
        "You are an expert B2B sales development representative.
Create personalized, engaging messages that:
- Are {tone}
- {goal}
- Are approximately {length}
- Include specific details about the prospect
- Have a clear call-to-action
- Feel genuine and not templated

Return a JSON object with:
- subject: compelling email subject line
- content: the email body (use \\n for line breaks)
- key_points: array of main value propositions mentioned
- follow_up_timing: suggested days to wait before following up",
        tone = message_type.tone(),
        goal = message_type.goal(),
        length = message_type.length(),
    )
}

/// Scoring capability that prompts Grok for JSON answers
///
/// No fallback heuristics: every failure surfaces as a [`CapabilityError`].
pub struct GrokScoringClient {
    client: GrokClient,
}

impl GrokScoringClient {
    pub fn new(client: GrokClient) -> Self {
        Self { client }
    }

    /// Underlying chat client
    pub fn inner(&self) -> &GrokClient {
        &self.client
    }
}

#[async_trait]
impl ScoringClient for GrokScoringClient {
    async fn score(&self, lead: &Lead) -> Result<ScoreResult, CapabilityError> {
        let lead_data = lead.prompt_context();
        let prompt = format!(
            "Score this lead based on the criteria:\n\nLead Information: {}\n\n\
             Scoring Criteria: {}\n\nProvide a comprehensive scoring analysis.",
            lead_data,
            scoring_criteria()
        );

        let value = self
            .client
            .analyze_json(&prompt, &lead_data, Some(SCORING_SYSTEM_PROMPT))
            .await?;
        parse_score(&value)
    }

    async fn generate_message(
        &self,
        lead: &Lead,
        message_type: MessageType,
    ) -> Result<GeneratedMessage, CapabilityError> {
        let lead_context = lead.prompt_context();
        let prompt = format!(
            "Generate a {} message for this lead:\n\nLead Information: {}\n\n{}\n\n\
             Make it personalized, contextually appropriate, and compelling.",
            message_type, lead_context, PRODUCT_PITCH
        );

        let value = self
            .client
            .analyze_json(&prompt, &lead_context, Some(&message_system_prompt(message_type)))
            .await?;
        parse_message(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_message_prompt_reflects_type() {
        let prompt = message_system_prompt(MessageType::MeetingRequest);
        assert!(prompt.contains("confident and direct"));
        assert!(prompt.contains("schedule a meeting or demo"));
    }

    #[tokio::test]
    async fn test_unconfigured_client_reports_error_marker() {
        let client = GrokScoringClient::new(GrokClient::new(ClientConfig::default()).unwrap());
        let lead = Lead::new("Test", "User");
        assert_eq!(client.score(&lead).await, Err(CapabilityError::NotConfigured));
        assert_eq!(
            client
                .generate_message(&lead, MessageType::FollowUp)
                .await,
            Err(CapabilityError::NotConfigured)
        );
    }
}
