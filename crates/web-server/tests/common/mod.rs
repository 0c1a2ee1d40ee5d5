// Shared helpers for driving the router in-process.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use configuration::{ServerSettings, ValidationSettings};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use web_server::AppState;

/// A router over fresh in-memory storage, plus the state so tests can
/// pre-load data through the services.
pub fn test_app() -> (Router, AppState) {
    test_app_with(&ValidationSettings::default())
}

pub fn test_app_with(validation: &ValidationSettings) -> (Router, AppState) {
    let state = AppState::in_memory(validation);
    let router = web_server::app(state.clone(), &ServerSettings::default());
    (router, state)
}

/// Sends one request with a JSON content type and returns the status and
/// the parsed JSON body (`Value::Null` when the body is empty or not JSON).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.unwrap_or("").to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
