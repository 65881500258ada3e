//! Station feed client
//!
//! One GET per call against the live station status XML document. Each
//! `<station>` element exposes `id`, `name`, `lat`, `long`, `nbBikes`,
//! `nbEmptyDocks` and `latestUpdateTime` (epoch milliseconds); all of them
//! are required, and a single malformed station fails the whole fetch.

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use domain::entities::Station;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::FeedConfig;
use crate::error::FeedError;

/// Trait for station feed clients
#[async_trait]
pub trait StationFeedClient: Send + Sync {
    /// Fetch the current status of all stations from the live feed
    async fn fetch_stations(&self) -> Result<Vec<Station>, FeedError>;
}

/// Client for the Capital Bikeshare station status feed
#[derive(Debug)]
pub struct BikeshareFeedClient {
    client: Client,
    config: FeedConfig,
}

impl BikeshareFeedClient {
    /// Create a new feed client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("DockFinder/0.3")
            .build()
            .map_err(|e| FeedError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw feed XML into typed stations
    ///
    /// All-or-nothing: any missing or malformed required field anywhere in
    /// the document yields a `ParseError` and no stations at all.
    fn parse_feed(body: &str) -> Result<Vec<Station>, FeedError> {
        let raw: RawStationList =
            quick_xml::de::from_str(body).map_err(|e| FeedError::ParseError(e.to_string()))?;

        raw.stations
            .into_iter()
            .map(Self::convert_station)
            .collect()
    }

    /// Convert a raw feed row into a domain station
    fn convert_station(raw: RawStation) -> Result<Station, FeedError> {
        let last_updated =
            DateTime::from_timestamp_millis(raw.latest_update_time).ok_or_else(|| {
                FeedError::ParseError(format!(
                    "latestUpdateTime {} out of range",
                    raw.latest_update_time
                ))
            })?;

        // Feed coordinates are taken verbatim, without range validation
        Ok(Station {
            id: raw.id,
            name: raw.name,
            location: GeoLocation::new_unchecked(raw.lat, raw.long),
            bikes_available: raw.nb_bikes,
            docks_available: raw.nb_empty_docks,
            last_updated,
        })
    }
}

#[async_trait]
impl StationFeedClient for BikeshareFeedClient {
    #[instrument(skip(self))]
    async fn fetch_stations(&self) -> Result<Vec<Station>, FeedError> {
        debug!(url = %self.config.feed_url, "Fetching station feed");

        let response = self
            .client
            .get(&self.config.feed_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FeedError::Timeout
                } else {
                    FeedError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(FeedError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::ParseError(e.to_string()))?;

        let stations = Self::parse_feed(&body)?;
        debug!(count = stations.len(), "Fetched station feed");
        Ok(stations)
    }
}

// --- Raw feed document types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawStationList {
    #[serde(rename = "station", default)]
    stations: Vec<RawStation>,
}

#[derive(Debug, Deserialize)]
struct RawStation {
    id: String,
    name: String,
    lat: f64,
    long: f64,
    #[serde(rename = "nbBikes")]
    nb_bikes: u32,
    #[serde(rename = "nbEmptyDocks")]
    nb_empty_docks: u32,
    #[serde(rename = "latestUpdateTime")]
    latest_update_time: i64,
}
