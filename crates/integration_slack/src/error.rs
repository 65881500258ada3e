//! Slack client error types

use thiserror::Error;

/// Errors that can occur talking to the Slack API
#[derive(Debug, Error)]
pub enum SlackError {
    /// Connection to the Slack API failed
    #[error("Slack connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the Slack API failed
    #[error("Slack request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a Slack API response
    #[error("Slack parse error: {0}")]
    ParseError(String),

    /// Slack reported the OAuth exchange as failed
    #[error("OAuth exchange rejected: {0}")]
    OAuthRejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SlackError::OAuthRejected("invalid_code".to_string());
        assert!(err.to_string().contains("invalid_code"));
    }
}
