//! Core types for the SDR lead-scoring evaluation harness
//!
//! - [`lead`]: the lead record sent to the scoring service
//! - [`capability`]: the `ScoringClient` interface the harness probes
//! - [`llm`]: a Grok chat-completions client implementing that interface
//! - [`config`]: connection settings and timeout defaults
//! - [`error`]: plumbing errors and the capability failure marker

pub mod capability;
pub mod config;
pub mod error;
pub mod lead;
pub mod llm;

pub use capability::{GeneratedMessage, MessageType, ScoreResult, ScoringClient};
#[cfg(any(test, feature = "testing"))]
pub use capability::MockScoringClient;
pub use config::ClientConfig;
pub use error::{CapabilityError, SdrError, SdrResult};
pub use lead::Lead;
pub use llm::{GrokClient, GrokScoringClient};
