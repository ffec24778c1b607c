//! Commhub API — HTTP surface of the internal communication service.
//!
//! Relays order lifecycle events between the Order and Delivery services and
//! exposes the in-memory event history for monitoring.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "internal-comm-service";

/// Builds the application router with every route mounted.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::root::router())
        .merge(routes::health::router())
        .merge(routes::events::router())
        .merge(routes::subscriptions::router())
        .with_state(state)
}
