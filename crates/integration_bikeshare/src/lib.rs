//! Live station feed integration for DockFinder
//!
//! Fetches and parses the Capital Bikeshare station status feed, an XML
//! document with one `<station>` element per dock. Parsing fails closed:
//! a single station with a missing or malformed required field fails the
//! whole fetch, so the pipeline never works from a silently truncated list.
//!
//! Every call is a live fetch; this crate deliberately does no caching.

mod client;
mod config;
mod error;

pub use client::{BikeshareFeedClient, StationFeedClient};
pub use config::FeedConfig;
pub use error::FeedError;
