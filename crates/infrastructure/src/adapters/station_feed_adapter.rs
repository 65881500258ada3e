//! Station feed adapter - Implements StationFeedPort using integration_bikeshare

use application::error::ApplicationError;
use application::ports::StationFeedPort;
use async_trait::async_trait;
use domain::entities::Station;
use integration_bikeshare::{BikeshareFeedClient, FeedError, StationFeedClient};
use tracing::instrument;

/// Adapter exposing the bikeshare feed client as a `StationFeedPort`
#[derive(Debug)]
pub struct StationFeedAdapter {
    client: BikeshareFeedClient,
}

impl StationFeedAdapter {
    /// Wrap a feed client
    #[must_use]
    pub const fn new(client: BikeshareFeedClient) -> Self {
        Self {
            client,
        }
    }
}

/// Map a feed failure onto the application error taxonomy
fn map_feed_error(error: FeedError) -> ApplicationError {
    match error {
        FeedError::ParseError(msg) => ApplicationError::Parse(msg),
        other => ApplicationError::Network(other.to_string()),
    }
}

#[async_trait]
impl StationFeedPort for StationFeedAdapter {
    #[instrument(skip(self))]
    async fn fetch_stations(&self) -> Result<Vec<Station>, ApplicationError> {
        self.client.fetch_stations().await.map_err(map_feed_error)
    }
}
