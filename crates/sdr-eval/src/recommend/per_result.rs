//! Recommendations attached to individual results at creation time

use crate::catalog::{EdgeCaseKind, PersonalizationElement};

/// Suggestions for one consistency fixture
pub fn scoring(std_dev: f64, in_range: bool) -> Vec<String> {
    let mut recommendations = Vec::new();

    if std_dev > 5.0 {
        recommendations
            .push("Reduce temperature parameter in Grok API for more consistent scoring".to_string());
        recommendations.push("Add explicit scoring rubric to the prompt".to_string());
    }

    if !in_range {
        recommendations.push("Calibrate scoring thresholds based on industry benchmarks".to_string());
        recommendations
            .push("Add few-shot examples to the prompt for better score calibration".to_string());
    }

    recommendations
}

/// Suggestions for a message that missed some required elements
pub fn personalization(missing: &[PersonalizationElement]) -> Vec<String> {
    let mut recommendations = Vec::new();
    if missing.is_empty() {
        return recommendations;
    }

    let names: Vec<&str> = missing.iter().map(PersonalizationElement::as_str).collect();
    recommendations.push(format!(
        "Ensure prompt explicitly requires: {}",
        names.join(", ")
    ));

    if missing.contains(&PersonalizationElement::ValueProposition) {
        recommendations.push("Add specific value props to prompt context".to_string());
    }

    if missing.contains(&PersonalizationElement::FirstName) {
        recommendations.push("Use template variables like {{first_name}} in prompt".to_string());
    }

    recommendations
}

/// Suggestions for an edge case the capability did not handle
pub fn edge_case(kind: EdgeCaseKind, handled: bool) -> Vec<String> {
    if handled {
        return Vec::new();
    }

    let text = match kind {
        EdgeCaseKind::UnusualCharacters => "Add Unicode handling and emoji sanitization",
        EdgeCaseKind::MissingData => "Implement default values for missing fields",
        EdgeCaseKind::LongStrings => "Add string length validation (max 100 chars)",
    };
    vec![text.to_string()]
}

/// Suggestion for an edge case whose call failed outright
pub fn edge_case_error(kind: EdgeCaseKind) -> Vec<String> {
    vec![format!("Add error handling for {}", kind)]
}

/// Suggestions for an injection fixture
pub fn injection(resisted: bool) -> Vec<String> {
    if resisted {
        Vec::new()
    } else {
        vec!["Review prompt templates for injection vulnerabilities".to_string()]
    }
}

/// Suggestions for the scoring latency group
pub fn scoring_latency(avg_secs: f64) -> Vec<String> {
    if avg_secs > 2.0 {
        vec!["Consider caching frequent queries".to_string()]
    } else {
        Vec::new()
    }
}

/// Suggestions for the message-generation latency group
pub fn message_latency(avg_secs: f64) -> Vec<String> {
    if avg_secs > 3.0 {
        vec!["Consider streaming responses for better UX".to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_recommendations() {
        assert!(scoring(2.0, true).is_empty());
        assert_eq!(scoring(7.5, true).len(), 2);
        assert_eq!(scoring(2.0, false).len(), 2);

        let all = scoring(10.0, false);
        assert_eq!(all.len(), 4);
        assert!(all[0].contains("temperature"));
        assert!(all[3].contains("few-shot"));
    }

    #[test]
    fn test_scoring_boundary_is_strict() {
        // exactly 5 neither passes the stability check nor triggers advice
        assert!(scoring(5.0, true).is_empty());
    }

    #[test]
    fn test_personalization_recommendations() {
        assert!(personalization(&[]).is_empty());

        let recs = personalization(&[
            PersonalizationElement::FirstName,
            PersonalizationElement::ValueProposition,
        ]);
        assert_eq!(
            recs[0],
            "Ensure prompt explicitly requires: first_name, value_proposition"
        );
        assert_eq!(recs[1], "Add specific value props to prompt context");
        assert_eq!(recs[2], "Use template variables like {{first_name}} in prompt");
    }

    #[test]
    fn test_edge_case_catalog() {
        assert!(edge_case(EdgeCaseKind::LongStrings, true).is_empty());
        assert_eq!(
            edge_case(EdgeCaseKind::LongStrings, false),
            vec!["Add string length validation (max 100 chars)".to_string()]
        );
        assert_eq!(
            edge_case_error(EdgeCaseKind::MissingData),
            vec!["Add error handling for missing_data".to_string()]
        );
    }

    #[test]
    fn test_latency_recommendations() {
        assert!(scoring_latency(2.0).is_empty());
        assert_eq!(scoring_latency(2.1).len(), 1);
        assert!(message_latency(3.0).is_empty());
        assert_eq!(message_latency(3.5).len(), 1);
    }
}
