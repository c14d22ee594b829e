//! The scoring/generation capability consumed by the evaluation harness
//!
//! The capability is opaque: an implementation may call a remote model, a
//! replay file, or a test double. Both operations may fail; failures are
//! returned as [`CapabilityError`] values so callers pattern-match instead
//! of inspecting response payloads for absent fields.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;
use crate::lead::Lead;

/// Kind of outreach message to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    InitialOutreach,
    FollowUp,
    MeetingRequest,
    ValueProposition,
    CasualCheckIn,
    ProblemSolution,
}

impl MessageType {
    /// Wire name used in prompts and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::InitialOutreach => "initial_outreach",
            MessageType::FollowUp => "follow_up",
            MessageType::MeetingRequest => "meeting_request",
            MessageType::ValueProposition => "value_proposition",
            MessageType::CasualCheckIn => "casual_check_in",
            MessageType::ProblemSolution => "problem_solution",
        }
    }

    /// Desired tone of the message
    pub fn tone(&self) -> &'static str {
        match self {
            MessageType::InitialOutreach => "professional and friendly",
            MessageType::FollowUp => "warm and persistent",
            MessageType::MeetingRequest => "confident and direct",
            MessageType::ValueProposition => "consultative and insightful",
            MessageType::CasualCheckIn => "informal and conversational",
            MessageType::ProblemSolution => "educational and helpful",
        }
    }

    /// What the message should achieve
    pub fn goal(&self) -> &'static str {
        match self {
            MessageType::InitialOutreach => "introduce our solution and gauge interest",
            MessageType::FollowUp => "re-engage and offer value",
            MessageType::MeetingRequest => "schedule a meeting or demo",
            MessageType::ValueProposition => "demonstrate specific value for their business",
            MessageType::CasualCheckIn => "maintain relationship without being pushy",
            MessageType::ProblemSolution => "address a specific pain point with our solution",
        }
    }

    /// Approximate length
    pub fn length(&self) -> &'static str {
        match self {
            MessageType::InitialOutreach
            | MessageType::ValueProposition
            | MessageType::ProblemSolution => "3-4 paragraphs",
            MessageType::FollowUp | MessageType::MeetingRequest => "2-3 paragraphs",
            MessageType::CasualCheckIn => "2 paragraphs",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A well-formed scoring answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Lead score; the service is asked for 0-100 but nothing enforces it
    pub score: f64,

    #[serde(default)]
    pub reasoning: String,

    #[serde(default)]
    pub strengths: Vec<String>,

    #[serde(default)]
    pub weaknesses: Vec<String>,

    #[serde(default)]
    pub recommended_action: Option<String>,
}

impl ScoreResult {
    /// Create a result with a score and reasoning only
    pub fn new(score: f64, reasoning: impl Into<String>) -> Self {
        Self {
            score,
            reasoning: reasoning.into(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            recommended_action: None,
        }
    }
}

/// A well-formed generated message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMessage {
    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub key_points: Vec<String>,

    #[serde(default)]
    pub follow_up_timing: Option<u32>,
}

impl GeneratedMessage {
    /// Create a message from subject and body
    pub fn new(subject: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            content: content.into(),
            key_points: Vec::new(),
            follow_up_timing: None,
        }
    }
}

/// Scoring and message-generation capability
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ScoringClient: Send + Sync {
    /// Score a lead from 0 to 100
    async fn score(&self, lead: &Lead) -> Result<ScoreResult, CapabilityError>;

    /// Generate an outreach message of the given kind
    async fn generate_message(
        &self,
        lead: &Lead,
        message_type: MessageType,
    ) -> Result<GeneratedMessage, CapabilityError>;
}
