//! HTTP presentation layer for DockFinder
//!
//! The thin glue around the resolution pipeline: the slash-command webhook
//! (token verification, form decoding, Slack JSON rendering), the OAuth
//! install flow, static pages and health probes. Everything interesting
//! happens in the application layer behind `StationFinder::resolve`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
