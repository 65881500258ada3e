//! Distance ranking and availability selection
//!
//! Pure functions, no I/O. Ranking is a stable ascending sort by haversine
//! distance, so two stations at the same distance keep their feed order.

use domain::entities::{RankedStation, Station};
use domain::value_objects::GeoLocation;

/// Rank stations by great-circle distance from a reference point
///
/// The returned sequence is monotonically non-decreasing in distance;
/// ties preserve the original feed order.
#[must_use]
pub fn rank(reference: &GeoLocation, stations: Vec<Station>) -> Vec<RankedStation> {
    let mut ranked: Vec<RankedStation> = stations
        .into_iter()
        .map(|station| RankedStation::from_reference(reference, station))
        .collect();
    // sort_by is stable; total_cmp gives a total order over f64
    ranked.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    ranked
}

/// First station in ranked order with at least one bike available
///
/// Returns `None` when the feed is empty or every station is out of bikes.
#[must_use]
pub fn first_with_bikes(ranked: &[RankedStation]) -> Option<&RankedStation> {
    ranked.iter().find(|r| r.station.has_bikes())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn station(id: &str, lat: f64, lon: f64, bikes: u32) -> Station {
        Station {
            id: id.to_string(),
            name: format!("Station {id}"),
            location: GeoLocation::new_unchecked(lat, lon),
            bikes_available: bikes,
            docks_available: 10,
            last_updated: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
        }
    }

    fn reference() -> GeoLocation {
        GeoLocation::new_unchecked(38.9, -77.0)
    }

    #[test]
    fn test_rank_orders_nearest_first() {
        let stations = vec![
            station("far", 38.95, -77.0, 1),
            station("near", 38.901, -77.0, 1),
            station("mid", 38.92, -77.0, 1),
        ];
        let ranked = rank(&reference(), stations);
        let ids: Vec<&str> = ranked.iter().map(|r| r.station.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
    }

    #[test]
    fn test_rank_is_non_decreasing() {
        let stations = vec![
            station("a", 38.93, -77.1, 0),
            station("b", 38.89, -76.98, 2),
            station("c", 38.9, -77.0, 5),
            station("d", 39.1, -77.2, 1),
        ];
        let ranked = rank(&reference(), stations);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_m <= pair[1].distance_m);
        }
    }

    #[test]
    fn test_rank_ties_keep_feed_order() {
        // Same coordinates, hence identical distances
        let stations = vec![
            station("first", 38.91, -77.0, 1),
            station("second", 38.91, -77.0, 1),
        ];
        let ranked = rank(&reference(), stations);
        assert_eq!(ranked[0].station.id, "first");
        assert_eq!(ranked[1].station.id, "second");
    }

    #[test]
    fn test_rank_empty_input() {
        let ranked = rank(&reference(), Vec::new());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_first_with_bikes_skips_empty_stations() {
        let stations = vec![
            station("nearest-empty", 38.901, -77.0, 0),
            station("second-with-bikes", 38.91, -77.0, 3),
            station("far", 38.95, -77.0, 9),
        ];
        let ranked = rank(&reference(), stations);
        let selected = first_with_bikes(&ranked).expect("a station with bikes");
        assert_eq!(selected.station.id, "second-with-bikes");
    }

    #[test]
    fn test_first_with_bikes_never_returns_zero_bikes() {
        let stations = vec![
            station("a", 38.901, -77.0, 0),
            station("b", 38.91, -77.0, 0),
        ];
        let ranked = rank(&reference(), stations);
        assert!(first_with_bikes(&ranked).is_none());
    }

    #[test]
    fn test_first_with_bikes_empty_feed() {
        assert!(first_with_bikes(&[]).is_none());
    }
}
