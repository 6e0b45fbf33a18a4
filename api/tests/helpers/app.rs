use api::{app, state::AppState};
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{TimeZone, Utc};
use common::config::ServerConfig;
use feedback::{FeedbackEngine, clock::FixedClock};
use serde_json::Value;

pub const FIXED_TIMESTAMP: &str = "2025-06-01T12:00:00Z";

pub fn make_test_app() -> Router {
    make_test_app_with(ServerConfig::default())
}

pub fn make_test_app_with(config: ServerConfig) -> Router {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    app(AppState::new(FeedbackEngine::with_clock(clock), config))
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
