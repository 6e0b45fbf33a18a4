use crate::response::{ApiResponse, Empty};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// GET /
///
/// Describes the service and lists its endpoints.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let endpoints = BTreeMap::from([
        ("generate_feedback", "/api/generate-feedback"),
        ("feedback_templates", "/api/feedback-templates"),
        ("health", "/api/health"),
    ]);

    Json(ApiResponse::success(
        ServiceInfo {
            name: state.config().project_name.clone(),
            version: env!("CARGO_PKG_VERSION"),
            status: "active",
            endpoints,
        },
        "Student feedback API",
    ))
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<Empty>::error(
            "The requested endpoint does not exist",
        )),
    )
}
