//! Address geocoding integration for DockFinder
//!
//! Converts free-form address strings to geographic coordinates using the
//! Google Maps Geocoding API.
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern shared by the other
//! integration crates: [`GeocodingClient`] defines the interface,
//! implemented by [`GoogleGeocodingClient`]. An unrecognized address is a
//! regular outcome (`Ok(None)`), never an error.

mod client;
mod config;
mod error;

pub use client::{GeocodingClient, GoogleGeocodingClient};
pub use config::GeocodingConfig;
pub use error::GeocodingError;
