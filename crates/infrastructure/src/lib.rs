//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer over the concrete
//! integration clients, and owns configuration loading and the optional
//! reply cache.

pub mod adapters;
pub mod cache;
pub mod config;

pub use adapters::{GeocodingAdapter, StationFeedAdapter};
pub use cache::{MokaReplyCache, parameterize};
pub use config::{AppConfig, CacheConfig, MapsConfig, ServerConfig};
