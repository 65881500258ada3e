//! Pipeline reply entity
//!
//! The structured outcome of one nearest-station lookup. Transport concerns
//! (Slack JSON shape, HTTP status) live in the presentation and integration
//! layers; this type only captures WHAT happened.

use serde::{Deserialize, Serialize};

use crate::entities::Station;
use crate::value_objects::GeoLocation;

/// Outcome of resolving a slash-command query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    /// Empty query or an explicit "help" request
    Help,
    /// The address could not be geocoded
    NoMatch,
    /// The feed was fetched but no station has a bike available
    NoBikesAvailable,
    /// Nearest station with at least one available bike
    StationFound {
        /// The selected station; always has `bikes_available > 0`
        station: Station,
        /// The geocoded query location the distance was measured from
        reference: GeoLocation,
        /// Walking-directions link from the reference to the station
        directions_url: String,
        /// Static map image centered on the station
        map_image_url: String,
    },
}

impl Reply {
    /// The selected station, if this reply carries one
    #[must_use]
    pub const fn station(&self) -> Option<&Station> {
        match self {
            Self::StationFound { station, .. } => Some(station),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn found_reply() -> Reply {
        Reply::StationFound {
            station: Station {
                id: "31200".to_string(),
                name: "Massachusetts Ave & Dupont Circle NW".to_string(),
                location: GeoLocation::new_unchecked(38.9101, -77.0444),
                bikes_available: 7,
                docks_available: 4,
                last_updated: Utc.with_ymd_and_hms(2026, 8, 6, 14, 30, 0).unwrap(),
            },
            reference: GeoLocation::new_unchecked(38.9077, -77.0365),
            directions_url: "https://maps.google.com?saddr=38.9077,-77.0365&daddr=38.9101,-77.0444&dirflg=w".to_string(),
            map_image_url: "https://maps.googleapis.com/maps/api/staticmap?key=k&size=400x200&markers=38.9101,-77.0444&scale=2".to_string(),
        }
    }

    #[test]
    fn test_station_accessor() {
        assert!(Reply::Help.station().is_none());
        assert!(Reply::NoMatch.station().is_none());
        assert!(Reply::NoBikesAvailable.station().is_none());
        assert_eq!(
            found_reply().station().map(|s| s.id.as_str()),
            Some("31200")
        );
    }

    #[test]
    fn test_serialization_tags_variants() {
        let json = serde_json::to_string(&Reply::NoMatch).expect("serialize");
        assert!(json.contains("no_match"));

        let json = serde_json::to_string(&found_reply()).expect("serialize");
        assert!(json.contains("station_found"));
        assert!(json.contains("Dupont Circle"));
    }

    #[test]
    fn test_roundtrip() {
        let reply = found_reply();
        let json = serde_json::to_string(&reply).expect("serialize");
        let back: Reply = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(reply, back);
    }
}
