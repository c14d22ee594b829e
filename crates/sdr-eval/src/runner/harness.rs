//! Call harness for driving the scoring capability
//!
//! Every capability call goes through [`CallHarness`], which bounds it with
//! the configured timeout, honours cancellation, converts a panicking
//! client into an error value, and measures wall-clock time.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use sdr_core::{CapabilityError, GeneratedMessage, Lead, MessageType, ScoreResult, ScoringClient};
use tokio::time::{Instant, timeout};
use tokio_util::sync::CancellationToken;

/// Result of one timed capability call
#[derive(Debug, Clone)]
pub struct CallOutcome<T> {
    pub result: Result<T, CapabilityError>,
    pub elapsed: Duration,
}

impl<T> CallOutcome<T> {
    /// Elapsed time in seconds
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Whether the call was skipped or aborted by cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self.result, Err(CapabilityError::Cancelled))
    }
}

/// Harness wrapping a [`ScoringClient`]
pub struct CallHarness<'a> {
    client: &'a dyn ScoringClient,
    timeout: Duration,
    cancel: CancellationToken,
}

impl<'a> CallHarness<'a> {
    pub fn new(client: &'a dyn ScoringClient, timeout: Duration, cancel: CancellationToken) -> Self {
        Self {
            client,
            timeout,
            cancel,
        }
    }

    /// Whether the run has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Score a lead
    pub async fn score(&self, lead: &Lead) -> CallOutcome<ScoreResult> {
        self.call(async move { self.client.score(lead).await }).await
    }

    /// Generate a message
    pub async fn generate_message(
        &self,
        lead: &Lead,
        message_type: MessageType,
    ) -> CallOutcome<GeneratedMessage> {
        self.call(async move { self.client.generate_message(lead, message_type).await })
            .await
    }

    async fn call<T, F>(&self, fut: F) -> CallOutcome<T>
    where
        F: Future<Output = Result<T, CapabilityError>>,
    {
        if self.cancel.is_cancelled() {
            return CallOutcome {
                result: Err(CapabilityError::Cancelled),
                elapsed: Duration::ZERO,
            };
        }

        // The future is not polled before this point, so a client that
        // panics while building its request is caught here as well.
        let start = Instant::now();
        let guarded = AssertUnwindSafe(fut).catch_unwind();

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(CapabilityError::Cancelled),
            outcome = timeout(self.timeout, guarded) => match outcome {
                Ok(Ok(result)) => result,
                Ok(Err(panic)) => Err(CapabilityError::Crashed(panic_message(panic.as_ref()))),
                Err(_) => Err(CapabilityError::Timeout {
                    seconds: self.timeout.as_secs(),
                }),
            },
        };

        let elapsed = start.elapsed();
        match &result {
            Ok(_) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "Capability call succeeded"),
            Err(e) => tracing::warn!(error = %e, elapsed_ms = elapsed.as_millis() as u64, "Capability call failed"),
        }

        CallOutcome { result, elapsed }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
