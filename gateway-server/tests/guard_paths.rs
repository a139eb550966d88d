//! Guard behavior through the HTTP router
//!
//! Every path exercised here short-circuits before the upstream call,
//! so the upstream URL points at an unroutable address on purpose: if a
//! guard ever lets a request through, the test fails on the 500 instead
//! of silently passing.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use gateway_server::{Config, Server, ServerState};

fn test_app() -> Router {
    let config = Config::with_overrides(0, "http://127.0.0.1:9");
    Server::build_router(ServerState::initialize(&config))
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn preflight_answered_with_cors_headers() {
    let app = test_app();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/get-tables")
        .header(header::ORIGIN, "http://pos.local")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn missing_sid_is_no_session() {
    let app = test_app();
    for path in ["/api/get-tables", "/api/get-menu"] {
        let (status, body) = post_json(&app, path, json!({})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(body["code"], "NO_SESSION", "{path}");
    }
}

#[tokio::test]
async fn unknown_session_is_expired() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/get-tables", json!({"sid": "ghost"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "SESSION_EXPIRED");
}

#[tokio::test]
async fn invoice_requires_invoice_id() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/get-pos-invoice", json!({"sid": "s1"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invoice ID is required");
}

#[tokio::test]
async fn taxes_missing_sid_is_validation_error() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/get-taxes", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Session ID required");
}

#[tokio::test]
async fn malformed_pin_rejected() {
    let app = test_app();
    for pin in ["", "12", "123456789", "12ab"] {
        let (status, body) = post_json(&app, "/api/login-with-pin", json!({"pin": pin})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "pin {pin:?}");
        assert_eq!(body["error"], "Invalid PIN format");
    }
}

#[tokio::test]
async fn login_rate_limit_caps_the_window() {
    let app = test_app();

    // Default window: 10 requests/min per client. Malformed PINs still
    // count against the window, and all ten fail validation.
    for _ in 0..10 {
        let (status, _) = post_json(&app, "/api/login-with-pin", json!({"pin": "1"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let request = Request::builder()
        .method("POST")
        .uri("/api/login-with-pin")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"pin": "1"}).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(header::RETRY_AFTER));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["retryAfter"].is_number());
    assert_eq!(body["error"], "Too many requests");
}
