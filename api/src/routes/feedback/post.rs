use crate::response::{ApiResponse, Empty};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feedback::FeedbackError;
use serde_json::{Value, json};
use tracing::{error, info, warn};

/// POST /generate-feedback
///
/// Generates feedback for one student.
///
/// ### Request Body
/// ```json
/// {
///   "studentData": {
///     "name": "Jane Smith",
///     "performance": 75,
///     "subject": "Science",
///     "weakAreas": ["Lab procedures"],
///     "strengths": ["Theory understanding"],
///     "learningStyle": "visual"
///   },
///   "criteria": { "rubric": { "excellence": 85 }, "weight": 0.5 }
/// }
/// ```
/// `criteria` may be omitted, in which case `{}` is used.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "studentName": "Jane Smith",
///     "subject": "Science",
///     "performanceLevel": "good",
///     "feedback": "Good progress! Jane Smith shows solid grasp of Science with room for improvement in Lab procedures.",
///     "recommendations": ["Target improvement areas: Lab procedures", "..."],
///     "nextSteps": ["Practice additional exercises in identified areas", "..."],
///     "timestamp": "2025-06-01T12:00:00Z"
///   },
///   "message": "Feedback generated successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// ```json
/// {
///   "success": false,
///   "data": ["name is required", "Performance must be a number between 0 and 100"],
///   "message": "Validation failed"
/// }
/// ```
///
/// - `400 Bad Request` (body missing, not JSON, or not an object)
/// - `413 Payload Too Large` (body over the configured limit)
/// - `500 Internal Server Error` (feedback could not be generated)
pub async fn generate_feedback(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) if body.is_object() => body,
        Ok(_) => return no_data(StatusCode::BAD_REQUEST),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Rejected feedback request body");
            let status = rejection.status();
            if status == StatusCode::PAYLOAD_TOO_LARGE {
                return (
                    status,
                    Json(ApiResponse::<Empty>::error("Request body too large")),
                )
                    .into_response();
            }
            return no_data(StatusCode::BAD_REQUEST);
        }
    };

    let student = body.get("studentData").unwrap_or(&Value::Null);
    let default_criteria = json!({});
    let criteria = body.get("criteria").unwrap_or(&default_criteria);

    match state.engine().process(student, Some(criteria)) {
        Ok(result) => {
            info!(
                student = %result.student_name,
                level = %result.performance_level,
                "Generated feedback"
            );
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    result,
                    "Feedback generated successfully",
                )),
            )
                .into_response()
        }
        Err(e) => failure_response(e),
    }
}

/// Maps an engine error onto its HTTP reply. Only validation failures expose detail.
fn failure_response(err: FeedbackError) -> Response {
    match err {
        FeedbackError::Validation(errors) => {
            warn!(errors = ?errors, "Feedback request failed validation");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(errors, "Validation failed")),
            )
                .into_response()
        }
        e => {
            error!(error = %e, "Feedback generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Feedback generation failed")),
            )
                .into_response()
        }
    }
}

fn no_data(status: StatusCode) -> Response {
    (
        status,
        Json(ApiResponse::<Empty>::error(
            "No data provided. Please provide a valid JSON object",
        )),
    )
        .into_response()
}
