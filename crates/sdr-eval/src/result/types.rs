//! Core result types for evaluation
//!
//! Results are assembled once by the probe that graded them and are
//! read-only afterwards: fields are private and only exposed through
//! accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category-specific diagnostic payload
pub type Details = Map<String, Value>;

/// Evaluation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Scoring consistency and calibration
    Scoring,
    /// Personalization of generated messages
    MessageGeneration,
    /// Response time
    Performance,
    /// Malformed or unusual input handling
    Robustness,
    /// Prompt-injection resistance
    Security,
}

impl Category {
    /// Wire name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Scoring => "scoring",
            Category::MessageGeneration => "message_generation",
            Category::Performance => "performance",
            Category::Robustness => "robustness",
            Category::Security => "security",
        }
    }

    /// Display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Scoring => "Scoring",
            Category::MessageGeneration => "Message Generation",
            Category::Performance => "Performance",
            Category::Robustness => "Robustness",
            Category::Security => "Security",
        }
    }

    /// All categories in run order
    pub fn all() -> &'static [Category] {
        &[
            Category::Scoring,
            Category::MessageGeneration,
            Category::Performance,
            Category::Robustness,
            Category::Security,
        ]
    }

    /// Parse a wire name
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of one probe execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    test_name: String,
    category: Category,
    success: bool,
    score: f64,
    execution_time: f64,
    #[serde(default)]
    details: Details,
    #[serde(default)]
    recommendations: Vec<String>,
    timestamp: DateTime<Utc>,
}

impl EvaluationResult {
    /// Create a graded result; `success` must come from the probe's rule
    pub fn new(
        test_name: impl Into<String>,
        category: Category,
        success: bool,
        score: f64,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            category,
            success,
            score,
            execution_time: 0.0,
            details: Details::new(),
            recommendations: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Set wall-clock duration of the probed call(s) in seconds
    pub fn with_execution_time(mut self, secs: f64) -> Self {
        self.execution_time = secs;
        self
    }

    /// Attach diagnostics; a non-object value is stored under `value`
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = match details {
            Value::Object(map) => map,
            other => {
                let mut map = Details::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        self
    }

    /// Attach improvement suggestions
    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.recommendations = recommendations;
        self
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Seconds
    pub fn execution_time(&self) -> f64 {
        self.execution_time
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Numeric detail lookup
    pub fn detail_f64(&self, key: &str) -> Option<f64> {
        self.details.get(key).and_then(Value::as_f64)
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::MessageGeneration.as_str(), "message_generation");
        assert_eq!(Category::parse("security"), Some(Category::Security));
        assert_eq!(Category::parse("unknown"), None);
        let json = serde_json::to_string(&Category::Robustness).unwrap();
        assert_eq!(json, "\"robustness\"");
    }

    #[test]
    fn test_result_builder() {
        let result = EvaluationResult::new("Edge Case - long_strings", Category::Robustness, true, 100.0)
            .with_execution_time(1.25)
            .with_details(json!({"test_type": "long_strings"}))
            .with_recommendations(vec!["none".to_string()]);

        assert!(result.success());
        assert_eq!(result.execution_time(), 1.25);
        assert_eq!(result.details()["test_type"], "long_strings");
        assert_eq!(result.recommendations().len(), 1);
    }

    #[test]
    fn test_non_object_details_are_wrapped() {
        let result = EvaluationResult::new("x", Category::Scoring, false, 0.0).with_details(json!(3));
        assert_eq!(result.detail_f64("value"), Some(3.0));
    }

    #[test]
    fn test_result_serializes_with_snake_case_fields() {
        let result = EvaluationResult::new("x", Category::Security, false, 0.0);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["category"], "security");
        assert!(value.get("execution_time").is_some());
        assert!(value.get("timestamp").is_some());
    }
}
