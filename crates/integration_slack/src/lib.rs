//! Slack integration for DockFinder
//!
//! The wire side of the service: typed slash-command request and response
//! payloads, rendering of pipeline replies into Slack's
//! `response_type`/`attachments`/`fields` shape, shared-secret token
//! verification, and the OAuth authorization-code exchange used by the
//! "Add to Slack" flow. None of this knows how a nearest station is found.

mod client;
mod config;
mod error;
mod types;

pub use client::{OAuthAccessResponse, SlackOAuthClient};
pub use config::SlackConfig;
pub use error::SlackError;
pub use types::{Attachment, Field, ResponseType, SlackResponse, SlashCommandRequest, render};

use subtle::ConstantTimeEq;

/// Compare a submitted verification token against the configured one
///
/// Constant-time comparison; differing lengths compare unequal without
/// shortcutting.
#[must_use]
pub fn verify_token(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
