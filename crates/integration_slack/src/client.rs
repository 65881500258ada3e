//! Slack OAuth client
//!
//! Exchanges the authorization code from the "Add to Slack" redirect for an
//! access token. This is the only call the service makes TO Slack; slash
//! commands arrive as webhooks and are answered in the HTTP response.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::SlackConfig;
use crate::error::SlackError;

/// Response of the `oauth.access` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthAccessResponse {
    /// Whether Slack accepted the exchange
    pub ok: bool,
    /// Granted access token (present when `ok`)
    #[serde(default)]
    pub access_token: Option<String>,
    /// Workspace the app was installed into
    #[serde(default)]
    pub team_name: Option<String>,
    /// Slack's error code (present when not `ok`)
    #[serde(default)]
    pub error: Option<String>,
}

/// Client for Slack's OAuth token exchange
#[derive(Debug)]
pub struct SlackOAuthClient {
    client: Client,
    config: SlackConfig,
}

impl SlackOAuthClient {
    /// Create a new OAuth client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &SlackConfig) -> Result<Self, SlackError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("DockFinder/0.3")
            .build()
            .map_err(|e| SlackError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Exchange an authorization code for an access token
    ///
    /// Returns the parsed response even when Slack reports `ok: false`, so
    /// the caller can show the failure page; transport and shape failures
    /// are errors.
    #[instrument(skip(self, code))]
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<OAuthAccessResponse, SlackError> {
        let url = format!("{}/api/oauth.access", self.config.api_base_url);

        let client_id = self.config.client_id.clone().unwrap_or_default();
        let client_secret = self
            .config
            .client_secret_str()
            .unwrap_or_default()
            .to_string();

        let params = [
            ("code", code.to_string()),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", redirect_uri.to_string()),
        ];

        debug!("Exchanging OAuth authorization code");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SlackError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SlackError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let access: OAuthAccessResponse = response
            .json()
            .await
            .map_err(|e| SlackError::ParseError(e.to_string()))?;

        debug!(ok = access.ok, team = ?access.team_name, "OAuth exchange answered");
        Ok(access)
    }
}
