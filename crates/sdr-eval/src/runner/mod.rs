//! Evaluation runner components
//!
//! This module provides the execution infrastructure for running probes.

mod config;
mod executor;
mod harness;

pub use config::EvalConfig;
pub use executor::{EvalExecutor, EvalProgress, ProgressCallback};
pub use harness::{CallHarness, CallOutcome};
