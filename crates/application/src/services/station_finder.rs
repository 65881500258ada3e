//! Nearest-station resolution pipeline
//!
//! One linear pass per query, no loops, no retries: normalize the query,
//! short-circuit on help, geocode, fetch the live feed, rank by distance,
//! pick the first station with bikes, and shape the reply. The two outbound
//! calls are strictly sequential; the feed is only fetched after the address
//! geocoded successfully.

use std::sync::Arc;

use domain::entities::Reply;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, StationFeedPort};
use crate::ranking;
use crate::services::ReplyFormatter;

/// Query prefixes stripped before geocoding ("/dock in <address>", ...)
const QUERY_PREFIXES: [&str; 3] = ["in", "for", "at"];

/// Strip a leading `in`/`for`/`at` prefix and surrounding whitespace
///
/// The prefix is only stripped when a rest of the query follows it, so a
/// bare "in" stays untouched and geocodes as-is.
#[must_use]
pub fn normalize_query(raw: &str) -> &str {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    if let (Some(first), Some(rest)) = (parts.next(), parts.next()) {
        if QUERY_PREFIXES
            .iter()
            .any(|prefix| first.eq_ignore_ascii_case(prefix))
        {
            return rest.trim_start();
        }
    }
    trimmed
}

/// The pipeline orchestrator: address in, `Reply` out
///
/// Collaborators are injected, so the whole pipeline is testable end-to-end
/// with mocked ports.
pub struct StationFinder {
    geocoding: Arc<dyn GeocodingPort>,
    station_feed: Arc<dyn StationFeedPort>,
    formatter: ReplyFormatter,
}

impl std::fmt::Debug for StationFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationFinder")
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

impl StationFinder {
    /// Create a new finder with injected collaborators
    #[must_use]
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        station_feed: Arc<dyn StationFeedPort>,
        formatter: ReplyFormatter,
    ) -> Self {
        Self {
            geocoding,
            station_feed,
            formatter,
        }
    }

    /// Resolve a raw slash-command query to a reply
    ///
    /// Geocoder "address unknown" maps to `Reply::NoMatch`; transport and
    /// parse failures of either outbound call propagate as errors and are
    /// never masked as `NoMatch`.
    #[instrument(skip(self))]
    pub async fn resolve(&self, raw_query: &str) -> Result<Reply, ApplicationError> {
        let query = normalize_query(raw_query);
        if query.is_empty() || query.eq_ignore_ascii_case("help") {
            return Ok(Reply::Help);
        }

        let Some(reference) = self.geocoding.geocode(query).await? else {
            debug!(%query, "Address not recognized by geocoder");
            return Ok(Reply::NoMatch);
        };

        let stations = self.station_feed.fetch_stations().await?;
        debug!(count = stations.len(), %reference, "Ranking stations");

        let ranked = ranking::rank(&reference, stations);
        let Some(nearest) = ranking::first_with_bikes(&ranked) else {
            debug!("No station with available bikes");
            return Ok(Reply::NoBikesAvailable);
        };

        debug!(
            station = %nearest.station,
            distance_m = nearest.distance_m,
            "Selected nearest station with bikes"
        );
        Ok(self
            .formatter
            .format(&reference, nearest.station.clone()))
    }
}
