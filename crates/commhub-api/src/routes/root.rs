//! Service index endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Well-known endpoints advertised by the index.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    /// Event history.
    pub events: &'static str,
    /// Subscriber registration.
    pub subscribe: &'static str,
    /// Collaborator health.
    pub health_check: &'static str,
}

/// Live counters.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Events recorded since startup.
    pub total_events: usize,
    /// Event types with at least one subscriber.
    pub subscribers: usize,
}

/// GET / response.
#[derive(Serialize)]
pub struct IndexResponse {
    /// Service title.
    pub message: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Well-known endpoints.
    pub endpoints: Endpoints,
    /// Live counters.
    pub stats: Stats,
}

/// GET /
async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Internal Communication Service",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            events: "/events",
            subscribe: "/subscribe",
            health_check: "/health/services",
        },
        stats: Stats {
            total_events: state.event_log.len(),
            subscribers: state.subscribers.event_type_count(),
        },
    })
}

/// Returns the index router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
