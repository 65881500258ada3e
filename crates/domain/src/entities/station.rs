//! Bikeshare station entities
//!
//! A `Station` is one row of the live status feed. Stations are produced
//! fresh on every fetch and live for a single request; nothing is persisted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A single bikeshare station as reported by the live feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    /// Feed-assigned station identifier
    pub id: String,
    /// Human-readable station name (usually an intersection)
    pub name: String,
    /// Station coordinates
    pub location: GeoLocation,
    /// Number of bikes currently available
    pub bikes_available: u32,
    /// Number of empty docks currently available
    pub docks_available: u32,
    /// When the feed last heard from this station
    pub last_updated: DateTime<Utc>,
}

impl Station {
    /// Whether at least one bike can be rented here right now
    #[must_use]
    pub const fn has_bikes(&self) -> bool {
        self.bikes_available > 0
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A station annotated with its distance from a reference point
///
/// A sequence of these is ordered nearest-first; equal distances keep
/// the original feed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedStation {
    /// The underlying station
    pub station: Station,
    /// Great-circle distance from the reference point in meters
    pub distance_m: f64,
}

impl RankedStation {
    /// Annotate a station with its distance from `reference`
    #[must_use]
    pub fn from_reference(reference: &GeoLocation, station: Station) -> Self {
        let distance_m = reference.distance_m(&station.location);
        Self {
            station,
            distance_m,
        }
    }
}

impl fmt::Display for RankedStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.0}m)", self.station.name, self.distance_m)
    }
}
