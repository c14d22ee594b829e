//! Evaluation result model
//!
//! One [`EvaluationResult`] records the outcome of one probe execution.

mod types;

pub use types::{Category, Details, EvaluationResult};
