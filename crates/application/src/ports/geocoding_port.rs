//! Geocoding port
//!
//! Turns a free-text address into coordinates. An unrecognized address is a
//! valid outcome (`Ok(None)`), not an error; errors are reserved for
//! transport and response-shape failures.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-text address to coordinates
    ///
    /// Returns `Ok(None)` when the provider does not recognize the address.
    /// Only the provider's first candidate is ever returned; there is no
    /// disambiguation among multiple matches.
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError>;
}
