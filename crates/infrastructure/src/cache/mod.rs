//! Optional reply caching

mod moka_cache;

pub use moka_cache::{MokaReplyCache, parameterize};
