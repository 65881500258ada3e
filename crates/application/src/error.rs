//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// `Network` and `Parse` carry failures of the two outbound dependencies
/// (geocoder, station feed). Neither is retried; both propagate to the
/// HTTP caller, which decides the transport-level response. An address the
/// geocoder does not recognize is NOT an error (see `Reply::NoMatch`).
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An outbound call failed to complete (DNS, connection, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// A response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable by the caller
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
