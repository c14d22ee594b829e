//! Lead Scoring Evaluation Harness
//!
//! This crate probes an AI lead-scoring and outreach-generation service
//! and grades it on five dimensions, then synthesizes prioritized
//! improvement recommendations.
//!
//! # Features
//!
//! - **Scoring consistency**: repeated scoring of the same lead, graded on
//!   spread and calibration against an expected range
//! - **Personalization**: keyword rules over generated messages
//! - **Response time**: mean latency of scoring and generation calls
//! - **Robustness and security**: unusual input and prompt-injection fixtures
//! - **Report generation**: JSON, Markdown and terminal table output, plus
//!   run-to-run regression detection
//!
//! # Example
//!
//! ```rust,ignore
//! use sdr_core::{ClientConfig, GrokClient, GrokScoringClient};
//! use sdr_eval::{EvalConfig, EvalExecutor};
//! use tokio_util::sync::CancellationToken;
//!
//! let client = GrokScoringClient::new(GrokClient::new(ClientConfig::from_env())?);
//! let executor = EvalExecutor::new(EvalConfig::default())?;
//! let report = executor.run(&client, CancellationToken::new()).await?;
//! println!("{:.1}%", report.overall_success_rate);
//! ```

pub mod catalog;
pub mod compare;
pub mod metrics;
pub mod probes;
pub mod recommend;
pub mod report;
pub mod result;
pub mod runner;

// Re-exports for convenience
pub use catalog::TestCatalog;
pub use compare::{Regression, RegressionDetector};
pub use metrics::{CriticalIssue, EvaluationSummary, MetricsAggregator};
pub use recommend::{Priority, Recommendation};
pub use report::{EvaluationReport, ReportFormat, generate_report};
pub use result::{Category, EvaluationResult};
pub use runner::{EvalConfig, EvalExecutor, EvalProgress};
