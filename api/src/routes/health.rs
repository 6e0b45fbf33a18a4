use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, Router, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Builds the `/health` route group.
///
/// This includes a single `GET /health` endpoint for uptime checks and load balancers.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": { "status": "healthy", "timestamp": "2025-06-01T12:00:00Z" },
///   "message": "Health check passed"
/// }
/// ```
pub async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success(
        HealthStatus {
            status: "healthy",
            timestamp: Utc::now(),
        },
        "Health check passed",
    ))
}
