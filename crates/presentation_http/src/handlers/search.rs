//! Slash-command webhook handler
//!
//! Receives the urlencoded form Slack posts for `/dock <address>`, verifies
//! the shared verification token, runs the resolution pipeline and answers
//! with the rendered Slack message in the HTTP response body. All resolved
//! outcomes are HTTP 200; a failed token check is 401; pipeline transport
//! or parse failures are 500.

use axum::{Form, Json, extract::State};
use integration_slack::{SlackResponse, SlashCommandRequest, render, verify_token};
use tracing::{debug, instrument, warn};

use application::services::normalize_query;
use infrastructure::parameterize;

use crate::error::ApiError;
use crate::state::AppState;

/// Handle a slash-command search request
#[instrument(skip(state, request))]
pub async fn search(
    State(state): State<AppState>,
    Form(request): Form<SlashCommandRequest>,
) -> Result<Json<SlackResponse>, ApiError> {
    let Some(expected_token) = state.config.slack.verification_token_str() else {
        warn!("Search request received but verification_token not configured");
        return Err(ApiError::ServiceUnavailable(
            "Slack verification token not configured".to_string(),
        ));
    };

    if !verify_token(&request.token, expected_token) {
        warn!("Slash-command token verification failed");
        return Err(ApiError::Unauthorized);
    }

    debug!(user = ?request.user_name, channel = ?request.channel_id, "Resolving query");

    // Cache sits around the pipeline, keyed by the normalized query; with
    // caching disabled (the default) every request resolves live.
    let cache_key = state
        .reply_cache
        .as_ref()
        .map(|_| parameterize(normalize_query(&request.text)));

    if let (Some(cache), Some(key)) = (&state.reply_cache, &cache_key) {
        if let Some(reply) = cache.get(key).await {
            debug!(%key, "Answering from reply cache");
            return Ok(Json(render(&reply)));
        }
    }

    let reply = state.finder.resolve(&request.text).await?;

    if let (Some(cache), Some(key)) = (&state.reply_cache, &cache_key) {
        cache.put(key, reply.clone()).await;
    }

    Ok(Json(render(&reply)))
}
