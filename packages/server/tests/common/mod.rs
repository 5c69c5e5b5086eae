//! Shared helpers for router-level tests.
//!
//! Tests run the real router over in-memory mock stores, so every request
//! goes through the full extractor / action / response pipeline without
//! Postgres.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use server_core::kernel::ServerDeps;
use server_core::server::build_app;

pub fn test_app() -> Router {
    build_app(ServerDeps::mock())
}

/// Send one request and return (status, parsed body). Non-JSON bodies come
/// back as a JSON string value.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, parsed)
}

/// A complete, valid event creation payload.
pub fn event_payload(title: &str, created_by: &str) -> Value {
    json!({
        "title": title,
        "description": "A community gathering",
        "eventType": "Cleanup",
        "thumbnail": "https://example.org/thumb.png",
        "location": "Dhaka",
        "date": "2026-09-15",
        "createdBy": created_by,
    })
}

/// Create an event and return its id.
pub async fn create_event(app: &Router, title: &str, created_by: &str) -> String {
    let (status, body) = request(app, "POST", "/events", Some(event_payload(title, created_by))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

/// Join an event and assert success.
pub async fn join(app: &Router, event_id: &str, email: &str) {
    let (status, body) = request(
        app,
        "POST",
        "/events/join",
        Some(json!({ "eventId": event_id, "userEmail": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "join failed: {body}");
}
