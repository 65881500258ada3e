//! Reply formatter
//!
//! Shapes the selected station into a `Reply::StationFound`: a walking-mode
//! directions link from the query location to the station, and a static map
//! image centered on the station. Both are plain string interpolation of
//! coordinates into fixed URL templates; no network calls happen here.

use domain::entities::{Reply, Station};
use domain::value_objects::GeoLocation;

/// Builds rich replies for found stations
#[derive(Debug, Clone)]
pub struct ReplyFormatter {
    /// API key for the static map image URL
    maps_api_key: String,
}

impl ReplyFormatter {
    /// Create a formatter with the static-map API key
    #[must_use]
    pub fn new(maps_api_key: impl Into<String>) -> Self {
        Self {
            maps_api_key: maps_api_key.into(),
        }
    }

    /// Build the `StationFound` reply for a station selected near `reference`
    #[must_use]
    pub fn format(&self, reference: &GeoLocation, station: Station) -> Reply {
        let directions_url = format!(
            "https://maps.google.com?saddr={},{}&daddr={},{}&dirflg=w",
            reference.latitude(),
            reference.longitude(),
            station.location.latitude(),
            station.location.longitude(),
        );
        let map_image_url = format!(
            "https://maps.googleapis.com/maps/api/staticmap?key={}&size=400x200&markers={},{}&scale=2",
            self.maps_api_key,
            station.location.latitude(),
            station.location.longitude(),
        );

        Reply::StationFound {
            station,
            reference: *reference,
            directions_url,
            map_image_url,
        }
    }
}
