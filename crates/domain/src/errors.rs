//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates {
        /// Latitude that failed validation
        latitude: f64,
        /// Longitude that failed validation
        longitude: f64,
    },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
