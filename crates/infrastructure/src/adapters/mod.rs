//! Adapters - Application port implementations over the integration clients

mod geocoding_adapter;
mod station_feed_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use station_feed_adapter::StationFeedAdapter;
