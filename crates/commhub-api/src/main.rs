//! Internal communication service entry point.

use std::error::Error;
use std::sync::Arc;

use commhub_api::config::Config;
use commhub_api::state::AppState;
use commhub_collaborators::{HttpDeliveryService, HttpOrderService};
use commhub_core::clock::SystemClock;
use commhub_event_log::InMemoryEventLog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting internal communication service");

    // Read configuration from environment.
    let config = Config::from_env()?;

    // Outbound clients. No client-wide timeout: only health probes are bounded.
    let http_client = reqwest::Client::builder().build()?;
    let order_service = HttpOrderService::new(
        http_client.clone(),
        config.order_service_url.clone(),
        config.health_probe_timeout,
    );
    let delivery_service = HttpDeliveryService::new(
        http_client,
        config.delivery_service_url.clone(),
        config.health_probe_timeout,
    );
    tracing::info!(order_service = %order_service.base_url(), "Order service configured");
    tracing::info!(delivery_service = %delivery_service.base_url(), "Delivery service configured");

    // Build application state.
    let app_state = AppState::new(
        Arc::new(InMemoryEventLog::new(Arc::new(SystemClock))),
        Arc::new(order_service),
        Arc::new(delivery_service),
    );

    // Build router.
    let app = commhub_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
