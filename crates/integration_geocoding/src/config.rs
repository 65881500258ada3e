//! Geocoding service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Google Maps geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the Geocoding API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API key sent with geocode requests (optional; the public endpoint
    /// works keyless at low volume)
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeocodingConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = GeocodingConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GeocodingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: GeocodingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.api_key.is_none());
    }
}
