//! Moka-backed reply cache
//!
//! In-memory cache of resolved replies keyed by the normalized query.
//! Entries expire after the configured TTL (~60s), so a busy channel
//! asking for the same address repeatedly does not hammer the geocoder
//! and the feed.

use std::time::Duration;

use application::ports::ReplyCachePort;
use async_trait::async_trait;
use domain::entities::Reply;
use moka::future::Cache;
use tracing::debug;

use crate::config::CacheConfig;

/// Normalize a query into a cache key
///
/// Runs of non-alphanumeric characters collapse into a single dash and the
/// result is lowercased, so "Dupont   Circle!" and "dupont circle" share an
/// entry.
#[must_use]
pub fn parameterize(query: &str) -> String {
    let mut key = String::with_capacity(query.len());
    let mut last_was_dash = false;
    for c in query.chars() {
        if c.is_ascii_alphanumeric() {
            key.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            key.push('-');
            last_was_dash = true;
        }
    }
    key
}

/// Moka-based reply cache
pub struct MokaReplyCache {
    cache: Cache<String, Reply>,
}

impl std::fmt::Debug for MokaReplyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaReplyCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl MokaReplyCache {
    /// Create a cache sized and expiring per configuration
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .build();

        Self {
            cache,
        }
    }
}

#[async_trait]
impl ReplyCachePort for MokaReplyCache {
    async fn get(&self, key: &str) -> Option<Reply> {
        let hit = self.cache.get(key).await;
        debug!(%key, hit = hit.is_some(), "Reply cache lookup");
        hit
    }

    async fn put(&self, key: &str, reply: Reply) {
        self.cache.insert(key.to_string(), reply).await;
    }
}
