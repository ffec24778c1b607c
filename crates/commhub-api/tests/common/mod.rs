//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use commhub_core::clock::Clock;
use commhub_core::collaborator::{DeliveryService, OrderService};
use commhub_event_log::InMemoryEventLog;
use commhub_test_support::{FixedClock, RecordingDeliveryService, RecordingOrderService};
use http_body_util::BodyExt;
use tower::ServiceExt;

use commhub_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// The app router plus handles to everything it writes to.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub event_log: Arc<InMemoryEventLog>,
}

/// Build the full app router around the given collaborators.
pub fn build_app_with(
    order_service: Arc<dyn OrderService>,
    delivery_service: Arc<dyn DeliveryService>,
) -> TestApp {
    let event_log = Arc::new(InMemoryEventLog::new(fixed_clock()));
    let state = AppState::new(event_log.clone(), order_service, delivery_service);
    TestApp {
        router: commhub_api::app(state.clone()),
        state,
        event_log,
    }
}

/// Build the full app router with recording collaborators that always succeed.
pub fn build_test_app() -> (
    TestApp,
    Arc<RecordingOrderService>,
    Arc<RecordingDeliveryService>,
) {
    let orders = Arc::new(RecordingOrderService::new());
    let delivery = Arc::new(RecordingDeliveryService::new());
    let app = build_app_with(orders.clone(), delivery.clone());
    (app, orders, delivery)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
