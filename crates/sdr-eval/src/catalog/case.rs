//! Fixture types
//!
//! Fixtures are read-only once the catalog is built.

use sdr_core::{Lead, MessageType};
use serde::{Deserialize, Serialize};

/// Closed score interval `[min, max]`, serialized as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange(pub f64, pub f64);

impl ScoreRange {
    pub fn min(&self) -> f64 {
        self.0
    }

    pub fn max(&self) -> f64 {
        self.1
    }

    /// Inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        self.0 <= value && value <= self.1
    }
}

/// Lead scored repeatedly to measure stability and calibration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyCase {
    pub description: String,
    pub lead: Lead,
    pub expected_range: ScoreRange,
}

/// Personalization element a generated message must exhibit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalizationElement {
    FirstName,
    Company,
    JobTitle,
    ValueProposition,
    PreviousContext,
    Urgency,
    SpecificTime,
    ClearAgenda,
}

impl PersonalizationElement {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalizationElement::FirstName => "first_name",
            PersonalizationElement::Company => "company",
            PersonalizationElement::JobTitle => "job_title",
            PersonalizationElement::ValueProposition => "value_proposition",
            PersonalizationElement::PreviousContext => "previous_context",
            PersonalizationElement::Urgency => "urgency",
            PersonalizationElement::SpecificTime => "specific_time",
            PersonalizationElement::ClearAgenda => "clear_agenda",
        }
    }
}

impl std::fmt::Display for PersonalizationElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message-generation fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizationCase {
    pub lead: Lead,
    pub message_type: MessageType,
    pub required_elements: Vec<PersonalizationElement>,
}

/// Kind of malformed input an edge case exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCaseKind {
    UnusualCharacters,
    MissingData,
    LongStrings,
}

impl EdgeCaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeCaseKind::UnusualCharacters => "unusual_characters",
            EdgeCaseKind::MissingData => "missing_data",
            EdgeCaseKind::LongStrings => "long_strings",
        }
    }
}

impl std::fmt::Display for EdgeCaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Robustness fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeCase {
    pub lead: Lead,
    pub test_type: EdgeCaseKind,
}

/// Adversarial fixture carrying an injection payload in one lead field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectionCase {
    pub test_name: String,
    pub lead: Lead,
}

/// Synthetic leads for the response-time probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyCases {
    pub scoring_lead: Lead,
    pub message_lead: Lead,
    #[serde(default = "default_latency_message_type")]
    pub message_type: MessageType,
}

fn default_latency_message_type() -> MessageType {
    MessageType::InitialOutreach
}

/// Complete fixture corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCatalog {
    #[serde(default)]
    pub consistency: Vec<ConsistencyCase>,

    #[serde(default)]
    pub personalization: Vec<PersonalizationCase>,

    #[serde(default)]
    pub edge_cases: Vec<EdgeCase>,

    #[serde(default)]
    pub injection: Vec<InjectionCase>,

    #[serde(default = "TestCatalog::builtin_latency")]
    pub latency: LatencyCases,
}

impl TestCatalog {
    /// Total number of fixtures (latency counts as its two synthetic leads)
    pub fn fixture_count(&self) -> usize {
        self.consistency.len()
            + self.personalization.len()
            + self.edge_cases.len()
            + self.injection.len()
            + 2
    }
}
