//! Error types for the SDR evaluation stack
//!
//! Two families live here. [`SdrError`] covers client setup (invalid
//! settings, HTTP client construction). [`CapabilityError`] is the explicit
//! failure marker returned by the scoring/generation capability; callers
//! match on it instead of probing a response for a missing field.

use thiserror::Error;

/// Result type alias for SDR operations
pub type SdrResult<T> = Result<T, SdrError>;

/// Main error type for SDR plumbing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdrError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SdrError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Failure of a single capability call (score or message generation)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CapabilityError {
    /// Transport-level failure (connection refused, TLS, DNS)
    #[error("request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status
    #[error("API request failed with status {status}")]
    Status { status: u16, body: String },

    /// The model answered with something that is not JSON
    #[error("failed to parse JSON response")]
    Parse { raw: String },

    /// The JSON answer lacks a field the caller needs
    #[error("response is missing field '{0}'")]
    MissingField(String),

    /// The call did not complete within its deadline
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The run was cancelled before the call was issued
    #[error("call cancelled")]
    Cancelled,

    /// The client implementation panicked mid-call
    #[error("capability crashed: {0}")]
    Crashed(String),

    /// No API key or endpoint configured
    #[error("scoring service is not configured")]
    NotConfigured,
}

impl CapabilityError {
    /// Create a missing-field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Whether the failure came from the deadline rather than the service
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

impl From<reqwest::Error> for CapabilityError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_error_messages() {
        let err = CapabilityError::Status {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API request failed with status 429");

        let err = CapabilityError::missing_field("score");
        assert_eq!(err.to_string(), "response is missing field 'score'");

        assert!(CapabilityError::Timeout { seconds: 30 }.is_timeout());
        assert!(!CapabilityError::Cancelled.is_timeout());
    }

    #[test]
    fn test_sdr_error_constructors() {
        assert_eq!(
            SdrError::config("empty base URL").to_string(),
            "Configuration error: empty base URL"
        );
        assert!(matches!(SdrError::invalid_input("x"), SdrError::InvalidInput(_)));
    }
}
