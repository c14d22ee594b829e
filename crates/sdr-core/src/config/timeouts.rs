//! Centralized timeout configuration
//!
//! Default timeout values for calls against the scoring service. All values
//! can be overridden through the evaluation configuration.

/// Connectivity checks (ping with a handful of tokens)
pub mod connect {
    /// Default timeout for a connectivity check (5 seconds)
    pub const CHECK_SECS: u64 = 5;
}

/// Scoring and message generation
pub mod llm {
    /// Default request timeout for scoring/generation (30 seconds)
    pub const REQUEST_SECS: u64 = 30;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_check_is_shorter_than_requests() {
        assert!(connect::CHECK_SECS < llm::REQUEST_SECS);
        assert_eq!(llm::REQUEST_SECS, 30);
    }
}
