//! Station feed configuration

use serde::{Deserialize, Serialize};

/// Configuration for the live station status feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Full URL of the station status XML document
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_feed_url() -> String {
    "https://www.capitalbikeshare.com/data/stations/bikeStations.xml".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FeedConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }
}
