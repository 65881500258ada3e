//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Externally visible base URL, used as the OAuth redirect target
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_public_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_base_url: default_public_base_url(),
            shutdown_timeout_secs: Some(30),
        }
    }
}

impl ServerConfig {
    /// The address the OAuth flow redirects back to
    #[must_use]
    pub fn oauth_redirect_uri(&self) -> String {
        format!("{}/auth", self.public_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.shutdown_timeout_secs, Some(30));
    }

    #[test]
    fn test_oauth_redirect_uri_strips_trailing_slash() {
        let config = ServerConfig {
            public_base_url: "https://dockfinder.example/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.oauth_redirect_uri(),
            "https://dockfinder.example/auth"
        );
    }
}
