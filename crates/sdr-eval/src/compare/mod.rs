//! Run-to-run comparison
//!
//! Compares a saved baseline report with a newer one to flag quality
//! regressions of the scoring capability.

mod regression;

pub use regression::{Regression, RegressionConfig, RegressionDetector, RegressionType};
