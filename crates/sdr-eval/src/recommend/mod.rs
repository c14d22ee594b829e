//! Improvement recommendations
//!
//! Two independent paths consume the same results: [`per_result`] builds
//! the suggestions attached to each result when a probe grades it, and
//! [`synthesize`] derives the prioritized, category-level list for the
//! report.

pub mod per_result;
mod synthesis;

pub use synthesis::{Priority, Recommendation, synthesize};
