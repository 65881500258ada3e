//! Ports - Interfaces to the outside world
//!
//! Adapters in the infrastructure layer implement these traits over the
//! concrete integration clients.

mod geocoding_port;
mod reply_cache_port;
mod station_feed_port;

pub use geocoding_port::GeocodingPort;
pub use reply_cache_port::ReplyCachePort;
pub use station_feed_port::StationFeedPort;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use reply_cache_port::MockReplyCachePort;
#[cfg(test)]
pub use station_feed_port::MockStationFeedPort;
