//! Application state shared across handlers

use std::sync::Arc;

use application::StationFinder;
use application::ports::ReplyCachePort;
use infrastructure::AppConfig;
use integration_slack::SlackOAuthClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The nearest-station resolution pipeline
    pub finder: Arc<StationFinder>,
    /// Optional reply cache, present only when enabled in configuration
    pub reply_cache: Option<Arc<dyn ReplyCachePort>>,
    /// OAuth client for the install flow
    pub oauth: Arc<SlackOAuthClient>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("finder", &self.finder)
            .field("reply_cache", &self.reply_cache.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
