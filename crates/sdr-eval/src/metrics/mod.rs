//! Result aggregation
//!
//! Rolls a results collection into success rates, per-category summaries
//! and critical issues. Everything here is computed on demand from an
//! immutable slice; there are no running counters.

mod aggregator;
mod types;

pub use aggregator::{MetricsAggregator, success_rate};
pub use types::{CategorySummary, CriticalIssue, EvaluationSummary, IssueKind};
