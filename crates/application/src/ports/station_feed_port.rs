//! Station feed port
//!
//! Retrieves the current list of bikeshare stations. Every call performs a
//! live fetch; there is no caching at this seam. The feed is all-or-nothing:
//! one malformed station fails the whole fetch rather than being dropped.

use async_trait::async_trait;
use domain::entities::Station;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the live station status feed
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StationFeedPort: Send + Sync {
    /// Fetch the current status of all stations
    async fn fetch_stations(&self) -> Result<Vec<Station>, ApplicationError>;
}
