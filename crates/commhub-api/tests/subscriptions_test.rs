//! Integration tests for the subscriber registry endpoints.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;

/// Starts a listener on an ephemeral port that counts every request it gets.
async fn spawn_callback_listener() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().fallback(move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            StatusCode::OK
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/hooks/orders"), hits)
}

#[tokio::test]
async fn test_subscribe_echoes_registration() {
    let (app, _, _) = common::build_test_app();

    let (status, json) = common::post_json(
        app.router,
        "/subscribe",
        &serde_json::json!({
            "eventType": "ORDER_CREATED",
            "callbackUrl": "http://restaurant.local/hooks/orders",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "message": "Subscribed successfully",
            "eventType": "ORDER_CREATED",
            "callbackUrl": "http://restaurant.local/hooks/orders",
        })
    );
}

#[tokio::test]
async fn test_registrations_are_listed_in_registration_order() {
    // Arrange
    let (app, _, _) = common::build_test_app();
    for url in ["http://one.local/hook", "http://two.local/hook"] {
        let (status, _) = common::post_json(
            app.router.clone(),
            "/subscribe",
            &serde_json::json!({ "eventType": "payment-completed", "callbackUrl": url }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // Act
    let (status, json) =
        common::get_json(app.router, "/subscriptions/PAYMENT_COMPLETED").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["eventType"], "PAYMENT_COMPLETED");
    assert_eq!(
        json["callbackUrls"],
        serde_json::json!(["http://one.local/hook", "http://two.local/hook"])
    );
}

#[tokio::test]
async fn test_subscribe_echoes_event_type_as_sent() {
    let (app, _, _) = common::build_test_app();

    let (status, json) = common::post_json(
        app.router,
        "/subscribe",
        &serde_json::json!({ "eventType": "order-created", "callbackUrl": "http://a.local" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["eventType"], "order-created");
}

#[tokio::test]
async fn test_subscribe_accepts_unrecognized_event_type() {
    // Arrange
    let (app, _, _) = common::build_test_app();

    // Act
    let (status, json) = common::post_json(
        app.router.clone(),
        "/subscribe",
        &serde_json::json!({ "eventType": "ORDER_CANCELLED", "callbackUrl": "http://a.local" }),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "message": "Subscribed successfully",
            "eventType": "ORDER_CANCELLED",
            "callbackUrl": "http://a.local",
        })
    );
    let (_, json) = common::get_json(app.router, "/subscriptions/ORDER_CANCELLED").await;
    assert_eq!(json["callbackUrls"], serde_json::json!(["http://a.local"]));
}

#[tokio::test]
async fn test_dispatch_never_calls_registered_callback() {
    // Arrange
    let (callback_url, hits) = spawn_callback_listener().await;
    let (app, orders, delivery) = common::build_test_app();
    let (status, _) = common::post_json(
        app.router.clone(),
        "/subscribe",
        &serde_json::json!({ "eventType": "ORDER_CREATED", "callbackUrl": callback_url }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Act
    let (status, _) = common::post_json(
        app.router,
        "/events/order-created",
        &serde_json::json!({ "orderId": 11, "restaurantId": 2 }),
    )
    .await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(delivery.assignments().len(), 1);
    assert_eq!(orders.status_updates().len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_subscribe_without_callback_url_returns_400() {
    let (app, _, _) = common::build_test_app();

    let (status, json) = common::post_json(
        app.router,
        "/subscribe",
        &serde_json::json!({ "eventType": "ORDER_CREATED" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_listing_type_without_registrations_is_empty() {
    let (app, _, _) = common::build_test_app();

    let (status, json) = common::get_json(app.router, "/subscriptions/order-created").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["callbackUrls"], serde_json::json!([]));
}
