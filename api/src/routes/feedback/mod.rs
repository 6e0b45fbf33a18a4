//! Feedback routes.
//!
//! - `POST /generate-feedback` → validate a student record and return generated feedback
//! - `GET /feedback-templates` → list performance levels with their thresholds and templates

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod get;
pub mod post;

pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-feedback", post(post::generate_feedback))
        .route("/feedback-templates", get(get::list_templates))
}
