//! Slack app configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Slack app (slash command + OAuth)
#[derive(Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Shared secret Slack sends with every slash-command request
    #[serde(default, skip_serializing)]
    pub verification_token: Option<SecretString>,

    /// OAuth client ID of the Slack app
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth client secret of the Slack app
    #[serde(default, skip_serializing)]
    pub client_secret: Option<SecretString>,

    /// Base URL of the Slack Web API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Connection timeout in seconds for Slack API calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field(
                "verification_token",
                &if self.verification_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &if self.client_secret.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_api_base_url() -> String {
    "https://slack.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            verification_token: None,
            client_id: None,
            client_secret: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SlackConfig {
    /// Get the verification token as a string reference
    #[must_use]
    pub fn verification_token_str(&self) -> Option<&str> {
        self.verification_token
            .as_ref()
            .map(ExposeSecret::expose_secret)
    }

    /// Get the OAuth client secret as a string reference
    #[must_use]
    pub fn client_secret_str(&self) -> Option<&str> {
        self.client_secret
            .as_ref()
            .map(ExposeSecret::expose_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SlackConfig::default();
        assert_eq!(config.api_base_url, "https://slack.com");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.verification_token.is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = SlackConfig {
            verification_token: Some(SecretString::from("sshh")),
            client_secret: Some(SecretString::from("also-sshh")),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("sshh"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_deserializes_secrets_from_plain_strings() {
        let json = r#"{ "verification_token": "tok", "client_id": "123.456" }"#;
        let config: SlackConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.verification_token_str(), Some("tok"));
        assert_eq!(config.client_id.as_deref(), Some("123.456"));
        assert!(config.client_secret_str().is_none());
    }
}
