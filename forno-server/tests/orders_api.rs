//! Order API integration tests
//!
//! Drives the full router over in-process requests: creation goes
//! through the validating calculator, every mutation lands in the
//! JSON snapshot.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use forno_server::{Config, ServerState, api};

async fn test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await;
    (dir, api::router(state))
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (_dir, app) = test_app().await;
    let (status, body) = request(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_order_applies_menu_discount() {
    let (_dir, app) = test_app().await;
    let payload = json!({ "pizzas": ["1"], "drinks": [1], "desserts": [1] });
    let (status, body) = request(&app, "POST", "/api/orders", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    // (8 + 2.5 + 5) * 0.9
    assert_eq!(body["totalPrice"], 13.95);
    assert_eq!(body["processed"], false);
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_order_unknown_drink_is_rejected() {
    let (_dir, app) = test_app().await;
    let payload = json!({ "pizzas": ["1"], "drinks": [99] });
    let (status, body) = request(&app, "POST", "/api/orders", Some(payload)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    // Nothing was persisted
    let (_, orders) = request(&app, "GET", "/api/orders", None).await;
    assert_eq!(orders.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_order_unavailable_dessert_is_rejected() {
    let (_dir, app) = test_app().await;
    // Seed dessert 5 (Crème brûlée) is flagged unavailable
    let payload = json!({ "pizzas": ["1"], "desserts": [5] });
    let (status, body) = request(&app, "POST", "/api/orders", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");
    assert!(body["message"].as_str().unwrap().contains("Crème brûlée"));
}

#[tokio::test]
async fn test_create_empty_order_is_rejected() {
    let (_dir, app) = test_app().await;
    let (status, body) = request(&app, "POST", "/api/orders", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn test_processed_flag_and_filtering() {
    let (_dir, app) = test_app().await;
    request(&app, "POST", "/api/orders", Some(json!({ "pizzas": ["1"] }))).await;
    request(&app, "POST", "/api/orders", Some(json!({ "pizzas": ["2"] }))).await;

    let (status, patched) = request(&app, "PATCH", "/api/orders/1/processed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["processed"], true);

    let (_, open) = request(&app, "GET", "/api/orders?processed=false", None).await;
    assert_eq!(open.as_array().unwrap().len(), 1);
    assert_eq!(open[0]["id"], 2);

    let (_, done) = request(&app, "GET", "/api/orders?processed=true", None).await;
    assert_eq!(done.as_array().unwrap().len(), 1);
    assert_eq!(done[0]["id"], 1);
}

#[tokio::test]
async fn test_item_edit_triggers_reprice_and_keeps_processed() {
    let (_dir, app) = test_app().await;
    let (_, order) = request(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "pizzas": ["1"] })),
    )
    .await;
    assert_eq!(order["totalPrice"], 8.0);

    request(&app, "PATCH", "/api/orders/1/processed", None).await;

    // Completing the menu recomputes the total; processed stays set
    let (status, updated) = request(
        &app,
        "PUT",
        "/api/orders/1",
        Some(json!({ "drinks": [1], "desserts": [1] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["totalPrice"], 13.95);
    assert_eq!(updated["processed"], true);
}

#[tokio::test]
async fn test_item_edit_with_bad_reference_leaves_order_untouched() {
    let (_dir, app) = test_app().await;
    request(&app, "POST", "/api/orders", Some(json!({ "pizzas": ["1"] }))).await;

    let (status, _) = request(
        &app,
        "PUT",
        "/api/orders/1",
        Some(json!({ "drinks": [99] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, order) = request(&app, "GET", "/api/orders/1", None).await;
    assert_eq!(order["totalPrice"], 8.0);
    assert_eq!(order["drinks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_total_price_override() {
    let (_dir, app) = test_app().await;
    request(&app, "POST", "/api/orders", Some(json!({ "pizzas": ["1"] }))).await;

    let (status, body) = request(
        &app,
        "PATCH",
        "/api/orders/1/total-price",
        Some(json!({ "totalPrice": 6.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPrice"], 6.5);

    // Negative overrides are invalid input
    let (status, _) = request(
        &app,
        "PATCH",
        "/api/orders/1/total-price",
        Some(json!({ "totalPrice": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_order() {
    let (_dir, app) = test_app().await;
    request(&app, "POST", "/api/orders", Some(json!({ "pizzas": ["1"] }))).await;

    let (status, _) = request(&app, "DELETE", "/api/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "GET", "/api/orders/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_orders_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);

    {
        let state = ServerState::initialize(&config).await;
        let app = api::router(state);
        let payload = json!({ "pizzas": ["1"], "drinks": [1], "desserts": [1] });
        request(&app, "POST", "/api/orders", Some(payload)).await;
    }

    // A fresh state over the same work dir sees the persisted order and
    // keeps the id sequence moving
    let state = ServerState::initialize(&config).await;
    let app = api::router(state);

    let (status, order) = request(&app, "GET", "/api/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["totalPrice"], 13.95);

    let (_, next) = request(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "pizzas": ["2"] })),
    )
    .await;
    assert_eq!(next["id"], 2);
}
