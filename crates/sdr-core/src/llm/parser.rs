//! Parsing of model answers into typed capability results

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::capability::{GeneratedMessage, ScoreResult};
use crate::error::CapabilityError;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("code fence pattern is valid")
});

/// Extract a JSON value from model output
///
/// Accepts bare JSON, JSON wrapped in a Markdown code fence, or JSON
/// embedded in prose (first `{` to last `}`).
pub fn extract_json(content: &str) -> Result<Value, CapabilityError> {
    let trimmed = content.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    if let Some(inner) = CODE_FENCE.captures(trimmed).and_then(|c| c.get(1)) {
        if let Ok(value) = serde_json::from_str(inner.as_str()) {
            return Ok(value);
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str(&trimmed[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(CapabilityError::Parse {
        raw: content.to_string(),
    })
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Build a [`ScoreResult`]; a missing or non-numeric `score` is an error
pub fn parse_score(value: &Value) -> Result<ScoreResult, CapabilityError> {
    let score = value
        .get("score")
        .and_then(Value::as_f64)
        .ok_or_else(|| CapabilityError::missing_field("score"))?;

    Ok(ScoreResult {
        score,
        reasoning: value["reasoning"].as_str().unwrap_or_default().to_string(),
        strengths: string_list(&value["strengths"]),
        weaknesses: string_list(&value["weaknesses"]),
        recommended_action: value["recommended_action"].as_str().map(str::to_string),
    })
}

/// Build a [`GeneratedMessage`]; a missing `subject` or `content` is an error
pub fn parse_message(value: &Value) -> Result<GeneratedMessage, CapabilityError> {
    let required = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| CapabilityError::missing_field(field))
    };
    let subject = required("subject")?;
    let content = required("content")?;

    Ok(GeneratedMessage {
        subject: subject.to_string(),
        content: content.to_string(),
        key_points: string_list(&value["key_points"]),
        follow_up_timing: value["follow_up_timing"].as_u64().map(|d| d as u32),
    })
}
