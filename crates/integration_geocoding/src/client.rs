//! Google Maps geocoding client
//!
//! One GET per lookup against the Geocoding API. The response carries a
//! `status` field; any well-formed non-`OK` status (`ZERO_RESULTS`,
//! `INVALID_REQUEST`, ...) means "address unrecognized" and maps to
//! `Ok(None)`. Only the first candidate result is used.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to coordinates
    ///
    /// Returns `Ok(None)` when the provider does not recognize the address.
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, GeocodingError>;
}

/// Geocoding client backed by the Google Maps Geocoding API
#[derive(Debug)]
pub struct GoogleGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl GoogleGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("DockFinder/0.3")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw geocode JSON body into an optional location
    fn parse_response(body: &str) -> Result<Option<GeoLocation>, GeocodingError> {
        let raw: RawGeocodeResponse =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        if raw.status != "OK" {
            return Ok(None);
        }

        let first = raw.results.first().ok_or_else(|| {
            GeocodingError::ParseError("status OK but results list is empty".to_string())
        })?;

        // Coordinates are passed through as the provider reports them
        Ok(Some(GeoLocation::new_unchecked(
            first.geometry.location.lat,
            first.geometry.location.lng,
        )))
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, GeocodingError> {
        let url = format!("{}/maps/api/geocode/json", self.config.base_url);

        let mut params = vec![
            ("address", address.to_string()),
            ("sensor", "false".to_string()),
        ];
        if let Some(ref key) = self.config.api_key {
            params.push(("key", key.clone()));
        }

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let location = Self::parse_response(&body)?;
        match location {
            Some(ref loc) => debug!(%address, %loc, "Geocoded address"),
            None => debug!(%address, "Address not recognized"),
        }
        Ok(location)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawGeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    location: RawLatLng,
}

#[derive(Debug, Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}
