//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `maps`: static map image settings
//! - `cache`: optional reply cache settings
//!
//! The geocoding, feed and Slack sections reuse the config types of their
//! integration crates, so defaults live next to the clients they describe.

mod cache;
mod maps;
mod server;

use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use maps::MapsConfig;
pub use server::ServerConfig;

use integration_bikeshare::FeedConfig;
use integration_geocoding::GeocodingConfig;
use integration_slack::SlackConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Slack app settings (verification token, OAuth client)
    #[serde(default)]
    pub slack: SlackConfig,

    /// Geocoding provider settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Station feed settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Static map image settings
    #[serde(default)]
    pub maps: MapsConfig,

    /// Optional reply cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) with
    /// `DOCKFINDER_*` environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns an error when the file or environment contain values that
    /// do not deserialize into the expected shape.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let builder = ::config::Config::builder()
            // Load from file if exists
            .add_source(::config::File::with_name("config").required(false))
            // Override with environment variables (e.g., DOCKFINDER_SERVER_PORT)
            .add_source(
                ::config::Environment::with_prefix("DOCKFINDER")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
