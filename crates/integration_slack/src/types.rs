//! Slack wire types
//!
//! Typed request/response payloads for the slash-command webhook, plus the
//! rendering of a pipeline [`Reply`] into Slack's message shape. Help and
//! error outcomes stay `ephemeral` (visible only to the requester); a found
//! station is posted `in_channel`.

use domain::entities::Reply;
use serde::{Deserialize, Serialize};

/// Urlencoded form payload Slack posts for a slash command
#[derive(Debug, Clone, Deserialize)]
pub struct SlashCommandRequest {
    /// Shared verification token
    #[serde(default)]
    pub token: String,
    /// Everything the user typed after the command
    #[serde(default)]
    pub text: String,
    /// Workspace the command came from
    #[serde(default)]
    pub team_id: Option<String>,
    /// Channel the command was issued in
    #[serde(default)]
    pub channel_id: Option<String>,
    /// Requesting user's handle
    #[serde(default)]
    pub user_name: Option<String>,
    /// The slash command itself (e.g. "/dock")
    #[serde(default)]
    pub command: Option<String>,
}

/// Who sees the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible only to the requesting user
    Ephemeral,
    /// Posted into the channel for everyone
    InChannel,
}

/// A short key/value display field inside an attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field label
    pub title: String,
    /// Field value
    pub value: String,
    /// Whether the field is short enough to sit side-by-side
    pub short: bool,
}

/// A rich message attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Plain-text summary for clients that cannot render attachments
    pub fallback: String,
    /// Accent color (hex)
    pub color: String,
    /// Text shown above the attachment
    pub pretext: String,
    /// Attachment title
    pub title: String,
    /// Link target of the title
    pub title_link: String,
    /// Image rendered inside the attachment
    pub image_url: String,
    /// Display fields
    pub fields: Vec<Field>,
}

/// Top-level response body for a slash command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackResponse {
    /// Visibility of the response
    pub response_type: ResponseType,
    /// Plain message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Rich attachments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl SlackResponse {
    /// Plain ephemeral text response
    #[must_use]
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: Some(text.into()),
            attachments: Vec::new(),
        }
    }
}

/// Accent color of the station attachment
const ATTACHMENT_COLOR: &str = "#ff300b";

/// Render a pipeline reply into the Slack response shape
#[must_use]
pub fn render(reply: &Reply) -> SlackResponse {
    match reply {
        Reply::Help => SlackResponse::ephemeral(
            "Enter an address to get the closest Capital Bikeshare dock with bikes. \
             For example, `/dock in 1600 Pennsylvania Avenue NW, Washington, DC`",
        ),
        Reply::NoMatch => SlackResponse::ephemeral("Sorry, I don’t understand that address."),
        Reply::NoBikesAvailable => SlackResponse::ephemeral(
            "Sorry, no Capital Bikeshare station has bikes available right now.",
        ),
        Reply::StationFound {
            station,
            directions_url,
            map_image_url,
            ..
        } => SlackResponse {
            response_type: ResponseType::InChannel,
            text: None,
            attachments: vec![Attachment {
                fallback: format!(
                    "The nearest Capital Bikeshare station with bikes is {}: {directions_url}",
                    station.name
                ),
                color: ATTACHMENT_COLOR.to_string(),
                pretext: "This is the nearest Capital Bikeshare station with bikes:".to_string(),
                title: station.name.clone(),
                title_link: directions_url.clone(),
                image_url: map_image_url.clone(),
                fields: vec![
                    Field {
                        title: "Available Bikes".to_string(),
                        value: station.bikes_available.to_string(),
                        short: true,
                    },
                    Field {
                        title: "Available Docks".to_string(),
                        value: station.docks_available.to_string(),
                        short: true,
                    },
                ],
            }],
        },
    }
}
