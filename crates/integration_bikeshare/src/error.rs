//! Station feed error types

use thiserror::Error;

/// Errors that can occur while fetching the station feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// Connection to the feed host failed
    #[error("Feed connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request for the feed failed
    #[error("Feed request failed: {0}")]
    RequestFailed(String),

    /// The feed document did not match the expected shape
    #[error("Feed parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Feed request timed out")]
    Timeout,
}

impl FeedError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout
        )
    }
}
