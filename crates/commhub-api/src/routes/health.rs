//! Health check endpoints.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::warn;

use commhub_core::error::CollaboratorError;

use crate::SERVICE_NAME;
use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
}

/// Outcome of probing one collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    /// The health endpoint answered 2xx within the probe timeout.
    Healthy,
    /// Anything else.
    Unhealthy,
}

impl ProbeStatus {
    fn from_probe(result: Result<(), CollaboratorError>) -> Self {
        match result {
            Ok(()) => Self::Healthy,
            Err(err) => {
                warn!(service = err.service(), error = %err, "health probe failed");
                Self::Unhealthy
            }
        }
    }
}

/// Health of the downstream collaborators.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesHealthResponse {
    /// Order service health.
    pub order_service: ProbeStatus,
    /// Delivery service health.
    pub delivery_service: ProbeStatus,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// GET /health/services
async fn services_health(State(state): State<AppState>) -> Json<ServicesHealthResponse> {
    let (order, delivery) = tokio::join!(
        state.order_service.health(),
        state.delivery_service.health()
    );

    Json(ServicesHealthResponse {
        order_service: ProbeStatus::from_probe(order),
        delivery_service: ProbeStatus::from_probe(delivery),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/services", get(services_health))
}
