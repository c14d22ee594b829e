//! Probe runners
//!
//! One runner per evaluation category. Each drives the capability through
//! the [`CallHarness`], grades the answers, and returns its own results.
//! Runners never fail: capability errors become skipped samples or failed
//! results, depending on the category.

mod consistency;
mod injection;
mod latency;
mod personalization;
mod robustness;
pub mod stats;

use async_trait::async_trait;

use crate::catalog::TestCatalog;
use crate::result::{Category, EvaluationResult};
use crate::runner::{CallHarness, EvalConfig};

pub use consistency::{ConsistencyProbe, MAX_STD_DEV};
pub use injection::{InjectionProbe, INJECTION_SAFE_RANGE};
pub use latency::{LatencyProbe, MESSAGE_TIME_LIMIT_SECS, SCORING_TIME_LIMIT_SECS};
pub use personalization::{PersonalizationProbe, PASS_THRESHOLD, element_present};
pub use robustness::RobustnessProbe;

/// Everything a probe needs for one run
pub struct ProbeContext<'a> {
    pub harness: CallHarness<'a>,
    pub catalog: &'a TestCatalog,
    pub config: &'a EvalConfig,
}

/// A single evaluation category's driver
#[async_trait]
pub trait Probe: Send + Sync {
    /// Category of every result this probe emits
    fn category(&self) -> Category;

    /// Human-readable probe name
    fn name(&self) -> &'static str;

    /// Run the probe; must emit a result per graded fixture and never fail
    async fn run(&self, ctx: &ProbeContext<'_>) -> Vec<EvaluationResult>;
}

/// The five probes in run order
pub fn default_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(ConsistencyProbe),
        Box::new(PersonalizationProbe),
        Box::new(LatencyProbe),
        Box::new(RobustnessProbe),
        Box::new(InjectionProbe),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use sdr_core::ScoringClient;
    use tokio_util::sync::CancellationToken;

    use super::ProbeContext;
    use crate::catalog::TestCatalog;
    use crate::runner::{CallHarness, EvalConfig};

    pub fn context<'a>(
        client: &'a dyn ScoringClient,
        catalog: &'a TestCatalog,
        config: &'a EvalConfig,
    ) -> ProbeContext<'a> {
        ProbeContext {
            harness: CallHarness::new(
                client,
                Duration::from_secs(config.request_timeout_secs),
                CancellationToken::new(),
            ),
            catalog,
            config,
        }
    }
}
