//! Chat-completions client and the Grok-backed scoring capability

mod client;
mod parser;
mod scoring;

pub use client::{ChatMessage, GrokClient};
pub use parser::{extract_json, parse_message, parse_score};
pub use scoring::GrokScoringClient;
