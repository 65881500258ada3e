//! Reply cache port
//!
//! Optional short-lived cache of resolved replies, keyed by the normalized
//! query. Deliberately outside the resolve contract: the webhook handler may
//! consult it around `StationFinder::resolve` when caching is enabled; the
//! default configuration (caching disabled) never touches it.

use async_trait::async_trait;
use domain::entities::Reply;
#[cfg(test)]
use mockall::automock;

/// Port for caching resolved replies
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReplyCachePort: Send + Sync {
    /// Look up a previously resolved reply
    async fn get(&self, key: &str) -> Option<Reply>;

    /// Store a resolved reply under the given key
    ///
    /// Expiry is the implementation's concern (TTL ~60s).
    async fn put(&self, key: &str, reply: Reply);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ReplyCachePort>();
    }
}
