//! DockFinder HTTP Server
//!
//! Main entry point for the slash-command webhook server.

use std::{sync::Arc, time::Duration};

use application::ports::{GeocodingPort, ReplyCachePort, StationFeedPort};
use application::{ReplyFormatter, StationFinder};
use infrastructure::{AppConfig, GeocodingAdapter, MokaReplyCache, StationFeedAdapter};
use integration_bikeshare::BikeshareFeedClient;
use integration_geocoding::GoogleGeocodingClient;
use integration_slack::SlackOAuthClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dockfinder_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚲 DockFinder v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        feed = %config.feed.feed_url,
        cache_enabled = config.cache.enabled,
        "Configuration loaded"
    );

    // Initialize outbound clients
    let geocoding_client = GoogleGeocodingClient::new(&config.geocoding)
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding client: {e}"))?;
    let feed_client = BikeshareFeedClient::new(&config.feed)
        .map_err(|e| anyhow::anyhow!("Failed to initialize feed client: {e}"))?;
    let oauth_client = SlackOAuthClient::new(&config.slack)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Slack client: {e}"))?;

    // Wire ports to adapters
    let geocoding: Arc<dyn GeocodingPort> = Arc::new(GeocodingAdapter::new(geocoding_client));
    let station_feed: Arc<dyn StationFeedPort> = Arc::new(StationFeedAdapter::new(feed_client));

    // Assemble the pipeline
    let finder = StationFinder::new(
        geocoding,
        station_feed,
        ReplyFormatter::new(config.maps.api_key.clone()),
    );

    // Optional reply cache
    let reply_cache: Option<Arc<dyn ReplyCachePort>> = if config.cache.enabled {
        info!(ttl_secs = config.cache.ttl_secs, "Reply cache enabled");
        Some(Arc::new(MokaReplyCache::new(&config.cache)))
    } else {
        None
    };

    // Create app state
    let state = AppState {
        finder: Arc::new(finder),
        reply_cache,
        oauth: Arc::new(oauth_client),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }

    info!(
        "Allowing up to {}s for in-flight requests to finish",
        timeout.as_secs()
    );
}
