//! Static map image configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the static map images embedded in replies
///
/// The key here is independent from the geocoding key; the two calls go to
/// different surfaces of the maps product and are configured separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapsConfig {
    /// API key interpolated into the static map image URL
    #[serde(default)]
    pub api_key: String,
}
