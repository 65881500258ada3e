//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_geocoding::{GeocodingClient, GeocodingError, GoogleGeocodingClient};
use tracing::instrument;

/// Adapter exposing the Google geocoding client as a `GeocodingPort`
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: GoogleGeocodingClient,
}

impl GeocodingAdapter {
    /// Wrap a geocoding client
    #[must_use]
    pub const fn new(client: GoogleGeocodingClient) -> Self {
        Self {
            client,
        }
    }
}

/// Map a geocoding failure onto the application error taxonomy
fn map_geocoding_error(error: GeocodingError) -> ApplicationError {
    match error {
        GeocodingError::ParseError(msg) => ApplicationError::Parse(msg),
        other => ApplicationError::Network(other.to_string()),
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError> {
        self.client
            .geocode(address)
            .await
            .map_err(map_geocoding_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_stay_parse_errors() {
        let mapped = map_geocoding_error(GeocodingError::ParseError("bad json".to_string()));
        assert!(matches!(mapped, ApplicationError::Parse(_)));
    }

    #[test]
    fn test_transport_errors_become_network_errors() {
        for error in [
            GeocodingError::ConnectionFailed("refused".to_string()),
            GeocodingError::RequestFailed("HTTP 503".to_string()),
            GeocodingError::Timeout,
        ] {
            assert!(matches!(
                map_geocoding_error(error),
                ApplicationError::Network(_)
            ));
        }
    }
}
