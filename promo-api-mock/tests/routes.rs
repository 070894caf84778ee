// promo-api-mock/tests/routes.rs
// Route tests driven through tower oneshot

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use promo_api_mock::{AppState, router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn promotion(name: &str, scope: &str, start: &str, end: &str) -> Value {
    json!({
        "promotion_name": name,
        "promotion_type": "PERCENTAGE",
        "promotion_value": 10,
        "promotion_scope": scope,
        "active": true,
        "start_date": start,
        "end_date": end
    })
}

fn setup() -> (Arc<AppState>, Router) {
    let state = AppState::shared();
    let app = router(state.clone());
    (state, app)
}

#[tokio::test]
async fn test_create_promotion() {
    let (_, app) = setup();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/promotions",
        Some(promotion("SPRING10", "entire_store", "2024-03-01", "2024-03-31")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["promotion_id"], 1);
    assert_eq!(body["promotion_name"], "SPRING10");
    assert_eq!(body["promotion_scope"], "ENTIRE_STORE");
    assert_eq!(body["start_date"], "2024-03-01T00:00:00");
    assert_eq!(body["promotion_value"].as_f64(), Some(10.0));
}

#[tokio::test]
async fn test_create_promotion_missing_data() {
    let (_, app) = setup();
    let (status, body) = send(&app, Method::POST, "/api/promotions", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "Bad Request: Invalid promotion: missing promotion_name");
}

#[tokio::test]
async fn test_create_promotion_invalid_content_type() {
    let (_, app) = setup();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/promotions")
        .header("Content-Type", "text/plain")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_get_promotion_not_found() {
    let (_, app) = setup();
    let (status, body) = send(&app, Method::GET, "/api/promotions/1234567", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Promotion with id: 1234567 not found");
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_update_with_invalid_data() {
    let (_, app) = setup();
    send(
        &app,
        Method::POST,
        "/api/promotions",
        Some(promotion("A", "product_id", "2024-01-01", "2024-02-01")),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/promotions/1",
        Some(json!({"promotion_name": "B", "start_date": "2023/04/21"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/promotions/1", None).await;
    assert_eq!(body["promotion_name"], "A");
}

#[tokio::test]
async fn test_update_unknown_id() {
    let (_, app) = setup();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/promotions/184182325",
        Some(json!({"promotion_name": "New"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (_, app) = setup();
    send(
        &app,
        Method::POST,
        "/api/promotions",
        Some(promotion("A", "product_id", "2024-01-01", "2024-02-01")),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, "/api/promotions/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/api/promotions/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/api/promotions/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_with_filter() {
    let (_, app) = setup();
    for p in [
        promotion("in-scope-in-date", "entire_store", "2025-01-01", "2026-01-01"),
        promotion("in-scope-out-of-date", "entire_store", "2024-01-01", "2025-03-01"),
        promotion("out-of-scope", "product_category", "2025-01-01", "2026-01-01"),
        promotion("second-scope", "product_id", "2025-01-01", "2026-01-01"),
    ] {
        send(&app, Method::POST, "/api/promotions", Some(p)).await;
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/promotions?promotion_scope=product_id,entire_store&datetime=2025-06-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["promotion_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["in-scope-in-date", "second-scope"]);

    let (_, body) = send(&app, Method::GET, "/api/promotions", None).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_list_with_bad_query() {
    let (_, app) = setup();
    let (status, body) = send(&app, Method::GET, "/api/promotions?datetime=2025-06-900", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("2025-06-900"));
}

#[tokio::test]
async fn test_activate_and_deactivate() {
    let (_, app) = setup();
    let mut p = promotion("A", "product_id", "2024-01-01", "2024-02-01");
    p["active"] = json!(false);
    send(&app, Method::POST, "/api/promotions", Some(p)).await;

    let (status, body) = send(&app, Method::PUT, "/api/promotions/activate/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], true);

    let (_, body) = send(&app, Method::PUT, "/api/promotions/deactivate/1", None).await;
    assert_eq!(body["active"], false);

    let (status, _) = send(&app, Method::PUT, "/api/promotions/activate/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (_, app) = setup();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": 200, "message": "Healthy"}));
}

#[tokio::test]
async fn test_legacy_routes_share_the_store() {
    let (_, app) = setup();
    let (status, body) = send(
        &app,
        Method::POST,
        "/promotions",
        Some(json!({"name": "OLD", "type": "absolute", "active": true, "scope": "product_id", "date": "2023-12-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["type"], "ABSOLUTE");
    assert_eq!(body["date"], "2023-12-01T00:00:00");

    let (_, body) = send(&app, Method::GET, "/api/promotions/1", None).await;
    assert_eq!(body["promotion_name"], "OLD");

    let (_, body) = send(&app, Method::GET, "/promotions?type=ABSOLUTE&active=true", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/promotions?name=NEW", None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_requests_are_recorded() {
    let (state, app) = setup();
    send(&app, Method::GET, "/api/promotions/5", None).await;
    send(&app, Method::DELETE, "/api/promotions/5", None).await;

    let requests = state.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].uri, "/api/promotions/5");
    assert_eq!(requests[1].method, "DELETE");
}
