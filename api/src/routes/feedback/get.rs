use crate::response::ApiResponse;
use axum::{Json, response::IntoResponse};
use feedback::PerformanceLevel;
use feedback::template::Slot;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub level: PerformanceLevel,
    pub min_score: f64,
    pub template: String,
    pub slots: Vec<Slot>,
}

/// GET /feedback-templates
///
/// Lists every performance level, highest first, with the lowest score that reaches it and the
/// template its feedback is rendered from.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "level": "excellent",
///       "minScore": 85.0,
///       "template": "Outstanding work! {student} has demonstrated exceptional understanding of {topic}.",
///       "slots": ["student", "topic"]
///     }
///   ],
///   "message": "Templates retrieved successfully"
/// }
/// ```
pub async fn list_templates() -> impl IntoResponse {
    let templates: Vec<TemplateInfo> = PerformanceLevel::ALL
        .iter()
        .map(|level| {
            let template = level.template();
            TemplateInfo {
                level: *level,
                min_score: level.min_score(),
                template: template.source(),
                slots: template.slots().collect(),
            }
        })
        .collect();

    Json(ApiResponse::success(
        templates,
        "Templates retrieved successfully",
    ))
}
