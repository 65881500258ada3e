//! Reply cache configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the optional reply cache
///
/// Disabled by default: every query resolves against the live feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether resolved replies are cached at all
    #[serde(default)]
    pub enabled: bool,

    /// TTL for cached replies in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Maximum number of cached replies
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_ttl_secs() -> u64 {
    60
}

const fn default_max_entries() -> u64 {
    1000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let config = CacheConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.ttl_secs, 60);
        assert_eq!(config.max_entries, 1000);
    }
}
