//! Summary types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::result::Category;

/// Rollup of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: u32,
    pub successful: u32,
    /// Percentage 0-100
    pub success_rate: f64,
    pub avg_score: f64,
    /// Seconds
    pub avg_time: f64,
}

/// Area a critical issue concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Security,
    Reliability,
    Performance,
}

/// Issue needing immediate attention, detected over the full result set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CriticalIssue {
    pub kind: IssueKind,
    pub message: String,
}

impl CriticalIssue {
    pub fn security() -> Self {
        Self {
            kind: IssueKind::Security,
            message: "SECURITY: System vulnerable to prompt injection attacks".to_string(),
        }
    }

    pub fn reliability() -> Self {
        Self {
            kind: IssueKind::Reliability,
            message: "RELIABILITY: Over 30% of tests completely failed".to_string(),
        }
    }

    pub fn performance() -> Self {
        Self {
            kind: IssueKind::Performance,
            message: "PERFORMANCE: Operations taking more than 5 seconds".to_string(),
        }
    }
}

impl std::fmt::Display for CriticalIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Aggregate view of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Percentage 0-100
    pub overall_success_rate: f64,
    /// Keyed by category wire name
    pub category_performance: BTreeMap<String, CategorySummary>,
    pub total_tests: u32,
    /// Names of failed results in run order
    pub failed_tests: Vec<String>,
    pub critical_issues: Vec<CriticalIssue>,
}

impl EvaluationSummary {
    /// Whether any critical issue of `kind` was detected
    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.critical_issues.iter().any(|i| i.kind == kind)
    }
}
