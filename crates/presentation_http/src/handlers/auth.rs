//! OAuth install flow handler
//!
//! Slack redirects here with an authorization code after the user approves
//! the app. The code is exchanged for an access token; the user sees a
//! success or failure page either way. This flow is entirely outside the
//! nearest-station pipeline.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::state::AppState;

/// Query parameters of the OAuth redirect
#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    /// Authorization code granted by Slack
    pub code: Option<String>,
}

const SUCCESS_PAGE: &str = concat!(
    "<!doctype html><html><head><title>Success!</title></head>",
    "<body><h1>Success!</h1>",
    "<p>DockFinder was added to your Slack workspace. ",
    "Try <code>/dock in 1600 Pennsylvania Avenue NW</code>.</p>",
    "</body></html>"
);

const FAIL_PAGE: &str = concat!(
    "<!doctype html><html><head><title>Auth failed!</title></head>",
    "<body><h1>Auth failed!</h1>",
    "<p>Slack did not authorize the installation. Please try again.</p>",
    "</body></html>"
);

/// Handle the OAuth redirect from Slack
#[instrument(skip(state, query))]
pub async fn auth(State(state): State<AppState>, Query(query): Query<AuthQuery>) -> Html<&'static str> {
    let Some(code) = query.code else {
        warn!("OAuth redirect without authorization code");
        return Html(FAIL_PAGE);
    };

    let redirect_uri = state.config.server.oauth_redirect_uri();
    match state.oauth.exchange_code(&code, &redirect_uri).await {
        Ok(access) if access.ok => {
            info!(team = ?access.team_name, "App installed");
            Html(SUCCESS_PAGE)
        }
        Ok(access) => {
            warn!(error = ?access.error, "OAuth exchange rejected");
            Html(FAIL_PAGE)
        }
        Err(e) => {
            warn!(error = %e, "OAuth exchange failed");
            Html(FAIL_PAGE)
        }
    }
}
