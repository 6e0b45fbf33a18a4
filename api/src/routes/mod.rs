//! HTTP route entry point.
//!
//! Route groups:
//! - `/` → Service description (public)
//! - `/api/health` → Health check endpoint (public)
//! - `/api/generate-feedback` → Feedback generation
//! - `/api/feedback-templates` → Performance levels and their templates
//!
//! Unknown paths fall through to a JSON `404`.

use crate::middleware::log_request;
use crate::routes::feedback::feedback_routes;
use crate::routes::health::health_routes;
use crate::state::AppState;
use axum::{Router, extract::DefaultBodyLimit, middleware::from_fn, routing::get};
use tower_http::cors::CorsLayer;

pub mod feedback;
pub mod health;
pub mod index;

/// Builds the `/api` route group.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .merge(feedback_routes())
}

/// Builds the complete application: all routes, the JSON fallback, the request body limit,
/// request logging and permissive CORS.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config().max_body_bytes();

    Router::new()
        .route("/", get(index::index))
        .nest("/api", routes())
        .fallback(index::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
}
