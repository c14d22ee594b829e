//! Lead records as seen by the scoring capability

use serde::{Deserialize, Serialize};

/// A prospective customer record
///
/// Every attribute is a plain string; an empty string means the value is
/// missing. Serializes to the JSON mapping embedded in model prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub job_title: String,

    #[serde(default)]
    pub industry: String,

    #[serde(default)]
    pub company_size: String,

    #[serde(default)]
    pub location: String,
}

impl Lead {
    /// Create a lead from a first and last name
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Set the company
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Set the job title
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    /// Set the industry
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    /// Set the company size bucket (e.g. "200-500")
    pub fn with_company_size(mut self, size: impl Into<String>) -> Self {
        self.company_size = size.into();
        self
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Full display name, trimmed when either part is missing
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Compact mapping sent to the model, with the name collapsed
    pub fn prompt_context(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.full_name(),
            "email": self.email,
            "company": self.company,
            "job_title": self.job_title,
            "industry": self.industry,
            "company_size": self.company_size,
            "location": self.location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_missing_parts() {
        assert_eq!(Lead::new("Sarah", "Williams").full_name(), "Sarah Williams");
        assert_eq!(Lead::new("Sarah", "").full_name(), "Sarah");
        assert_eq!(Lead::default().full_name(), "");
    }

    #[test]
    fn test_deserialize_partial_lead() {
        let lead: Lead = serde_json::from_str(r#"{"first_name": "Emily", "company": "HealthTech"}"#)
            .unwrap();
        assert_eq!(lead.first_name, "Emily");
        assert_eq!(lead.company, "HealthTech");
        assert!(lead.job_title.is_empty());
    }

    #[test]
    fn test_prompt_context_collapses_name() {
        let lead = Lead::new("John", "Smith").with_job_title("VP of Sales");
        let ctx = lead.prompt_context();
        assert_eq!(ctx["name"], "John Smith");
        assert_eq!(ctx["job_title"], "VP of Sales");
    }
}
