use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contact_intake_api::app;
use contact_intake_api::config::Config;
use contact_intake_api::content_store::{CachedContent, FileContentSource};
use contact_intake_api::dispatcher::Dispatcher;
use contact_intake_api::handlers::AppState;

/// Main entry point for the application.
///
/// Initializes logging, configuration, the email dispatcher and the content
/// cache, then serves the routes behind rate limiting.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_intake_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let dispatcher = Dispatcher::from_config(&config)?;
    tracing::info!("Contact submissions will be sent to {}", dispatcher.recipient());

    let content = CachedContent::new(
        Arc::new(FileContentSource::new(config.content_path.clone())),
        Duration::from_secs(config.content_cache_ttl_secs),
    );
    tracing::info!(
        "Content cache initialized ({}s TTL) for {}",
        config.content_cache_ttl_secs,
        config.content_path
    );

    let port = config.port;
    let app_state = Arc::new(AppState {
        config,
        dispatcher,
        content,
    });

    // Rate limiter: 5 requests/second per IP, burst of 10
    let api = app::rate_limited(
        app::api_routes(),
        app::RATE_LIMIT_PER_SECOND,
        app::RATE_LIMIT_BURST,
    )?;
    let router = app::build_app(app_state, api);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Peer addresses are needed by the rate limiter when no proxy headers are present
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
