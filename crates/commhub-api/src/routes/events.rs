//! Routes for publishing events and reading event history.
//!
//! Publishing endpoints acknowledge with 200 once the event is recorded,
//! whether or not the downstream calls it triggers succeed.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use commhub_core::error::DomainError;
use commhub_core::event::OrderId;
use commhub_core::field::Field;
use commhub_dispatch::application::query_handlers::{
    self, DEFAULT_RECENT_EVENTS, EventHistoryView, OrderEventsView,
};
use commhub_dispatch::application::command_handlers;
use commhub_dispatch::domain::commands::{
    RecordDeliveryStatusUpdate, RecordOrderCreated, RecordPaymentCompleted,
};

use crate::error::ApiError;
use crate::state::AppState;

const EVENT_PROCESSED: &str = "Event processed";

/// Request body for POST /events/order-created.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedRequest {
    /// The new order.
    pub order_id: Option<OrderId>,
    /// Restaurant the order was placed with.
    #[serde(default)]
    pub restaurant_id: Field<i64>,
}

/// Request body for POST /events/delivery-status-updated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStatusUpdatedRequest {
    /// The order being delivered.
    pub order_id: Option<OrderId>,
    /// Delivery-status code.
    #[serde(default)]
    pub status: Field<String>,
}

/// Request body for POST /events/payment-completed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCompletedRequest {
    /// The order that was paid for.
    pub order_id: Option<OrderId>,
    /// Payment reference.
    #[serde(default)]
    pub payment_id: Field<String>,
    /// Payment outcome.
    #[serde(default)]
    pub status: Field<String>,
}

/// Acknowledgement returned by every publishing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAck {
    /// Always "Event processed".
    pub message: &'static str,
    /// Order the event was about.
    pub order_id: OrderId,
    /// Echo of the delivery status, for delivery-status events only.
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub status: Field<String>,
}

/// Query string for GET /events.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// How many trailing events to return.
    pub limit: Option<usize>,
}

fn require_order_id(order_id: Option<OrderId>) -> Result<OrderId, ApiError> {
    order_id.ok_or_else(|| DomainError::Validation("orderId is required".into()).into())
}

/// POST /events/order-created
#[instrument(skip(state, request), fields(order_id = ?request.order_id))]
async fn order_created(
    State(state): State<AppState>,
    Json(request): Json<OrderCreatedRequest>,
) -> Result<Json<EventAck>, ApiError> {
    let command = RecordOrderCreated {
        order_id: require_order_id(request.order_id)?,
        restaurant_id: request.restaurant_id,
    };

    let receipt = command_handlers::handle_order_created(
        &command,
        state.event_log.as_ref(),
        state.delivery_service.as_ref(),
        state.order_service.as_ref(),
    )
    .await;
    debug!(reaction = ?receipt.reaction, "order-created dispatched");

    Ok(Json(EventAck {
        message: EVENT_PROCESSED,
        order_id: command.order_id,
        status: Field::Missing,
    }))
}

/// POST /events/delivery-status-updated
#[instrument(skip(state, request), fields(order_id = ?request.order_id))]
async fn delivery_status_updated(
    State(state): State<AppState>,
    Json(request): Json<DeliveryStatusUpdatedRequest>,
) -> Result<Json<EventAck>, ApiError> {
    let command = RecordDeliveryStatusUpdate {
        order_id: require_order_id(request.order_id)?,
        status: request.status,
    };

    let receipt = command_handlers::handle_delivery_status_updated(
        &command,
        state.event_log.as_ref(),
        state.order_service.as_ref(),
    )
    .await;
    debug!(reaction = ?receipt.reaction, "delivery-status-updated dispatched");

    Ok(Json(EventAck {
        message: EVENT_PROCESSED,
        order_id: command.order_id,
        status: command.status,
    }))
}

/// POST /events/payment-completed
#[instrument(skip(state, request), fields(order_id = ?request.order_id))]
async fn payment_completed(
    State(state): State<AppState>,
    Json(request): Json<PaymentCompletedRequest>,
) -> Result<Json<EventAck>, ApiError> {
    let command = RecordPaymentCompleted {
        order_id: require_order_id(request.order_id)?,
        payment_id: request.payment_id,
        status: request.status,
    };

    let receipt = command_handlers::handle_payment_completed(
        &command,
        state.event_log.as_ref(),
        state.order_service.as_ref(),
    )
    .await;
    debug!(reaction = ?receipt.reaction, "payment-completed dispatched");

    Ok(Json(EventAck {
        message: EVENT_PROCESSED,
        order_id: command.order_id,
        status: Field::Missing,
    }))
}

/// GET /events
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<EventHistoryView> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_EVENTS);
    Json(query_handlers::recent_events(state.event_log.as_ref(), limit))
}

/// GET /events/{order_id}
async fn events_for_order(
    State(state): State<AppState>,
    Path(raw_order_id): Path<String>,
) -> Result<Json<OrderEventsView>, ApiError> {
    let order_id: OrderId = raw_order_id.parse().map_err(|_| {
        DomainError::Validation(format!("order id must be an integer, got {raw_order_id:?}"))
    })?;
    Ok(Json(query_handlers::events_for_order(
        state.event_log.as_ref(),
        order_id,
    )))
}

/// Returns the router for event publishing and history.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/order-created", post(order_created))
        .route(
            "/events/delivery-status-updated",
            post(delivery_status_updated),
        )
        .route("/events/payment-completed", post(payment_completed))
        .route("/events/{order_id}", get(events_for_order))
}
