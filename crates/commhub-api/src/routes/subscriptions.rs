//! Routes for the subscriber registry.
//!
//! Registrations are stored and listed but never called back. Any event type
//! string is accepted and echoed back as sent.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use commhub_core::error::DomainError;
use commhub_dispatch::application::query_handlers::{self, SubscriptionsView};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /subscribe.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    /// Event type name, e.g. `ORDER_CREATED` or `order-created`.
    pub event_type: Option<String>,
    /// Address to register.
    pub callback_url: Option<String>,
}

/// Response body for POST /subscribe.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeResponse {
    /// Always "Subscribed successfully".
    pub message: &'static str,
    /// The event type exactly as it was sent.
    pub event_type: String,
    /// The registered address.
    pub callback_url: String,
}

/// POST /subscribe
#[instrument(skip(state, request), fields(event_type = ?request.event_type))]
async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, ApiError> {
    let event_type = request
        .event_type
        .ok_or_else(|| DomainError::Validation("eventType is required".into()))?;
    let callback_url = request
        .callback_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| DomainError::Validation("callbackUrl is required".into()))?;

    state.subscribers.register(&event_type, callback_url.clone());
    info!(%event_type, %callback_url, "subscriber registered");

    Ok(Json(SubscribeResponse {
        message: "Subscribed successfully",
        event_type,
        callback_url,
    }))
}

/// GET /subscriptions/{event_type}
async fn list_subscriptions(
    State(state): State<AppState>,
    Path(event_type): Path<String>,
) -> Json<SubscriptionsView> {
    Json(query_handlers::list_subscribers(
        &state.subscribers,
        &event_type,
    ))
}

/// Returns the router for subscriptions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribe))
        .route("/subscriptions/{event_type}", get(list_subscriptions))
}
