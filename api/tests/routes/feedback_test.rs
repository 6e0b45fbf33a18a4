#[cfg(test)]
mod tests {
    use crate::helpers::app::{FIXED_TIMESTAMP, get, post_json};
    use crate::helpers::{make_test_app, make_test_app_with, read_json};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::config::ServerConfig;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn excellent_student_gets_outstanding_feedback() {
        let app = make_test_app();
        let body = json!({
            "studentData": {
                "name": "John Doe",
                "performance": 90,
                "subject": "Mathematics",
                "weakAreas": [],
                "strengths": ["Problem solving", "Analytical thinking"]
            },
            "criteria": {}
        });

        let response = app
            .oneshot(post_json("/api/generate-feedback", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Feedback generated successfully");
        let data = &json["data"];
        assert_eq!(data["studentName"], "John Doe");
        assert_eq!(data["subject"], "Mathematics");
        assert_eq!(data["performanceLevel"], "excellent");
        assert!(
            data["feedback"]
                .as_str()
                .unwrap()
                .contains("Outstanding work!")
        );
        assert_eq!(
            data["recommendations"],
            json!(["Build upon strengths: Problem solving, Analytical thinking"])
        );
        assert_eq!(
            data["nextSteps"],
            json!([
                "Explore advanced topics and challenges",
                "Consider peer tutoring opportunities"
            ])
        );
        assert_eq!(data["timestamp"], FIXED_TIMESTAMP);
    }

    #[tokio::test]
    async fn good_student_mentions_weak_area() {
        let app = make_test_app();
        let body = json!({
            "studentData": {
                "name": "Jane Smith",
                "performance": 75,
                "subject": "Science",
                "weakAreas": ["Lab procedures"],
                "strengths": ["Theory understanding"]
            },
            "criteria": {}
        });

        let response = app
            .oneshot(post_json("/api/generate-feedback", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let data = &json["data"];
        assert_eq!(data["performanceLevel"], "good");
        assert!(data["feedback"].as_str().unwrap().contains("Good progress!"));
        assert!(
            data["recommendations"]
                .as_array()
                .unwrap()
                .iter()
                .any(|line| line.as_str().unwrap().contains("Lab procedures"))
        );
    }

    #[tokio::test]
    async fn struggling_student_gets_support_steps() {
        let app = make_test_app();
        let body = json!({
            "studentData": {
                "name": "Bob Johnson",
                "performance": 60,
                "subject": "English",
                "weakAreas": ["Grammar", "Vocabulary"],
                "strengths": ["Creative writing"]
            }
        });

        let response = app
            .oneshot(post_json("/api/generate-feedback", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let data = &json["data"];
        assert_eq!(data["performanceLevel"], "needsImprovement");
        assert!(
            data["feedback"]
                .as_str()
                .unwrap()
                .contains("needs additional support")
        );
        assert_eq!(
            data["nextSteps"],
            json!([
                "Schedule additional support sessions",
                "Review fundamental concepts",
                "Focus specifically on: Grammar and Vocabulary"
            ])
        );
    }

    #[tokio::test]
    async fn sanitizes_student_name() {
        let app = make_test_app();
        let body = json!({
            "studentData": { "name": " <b>Bob</b> ", "performance": 72, "subject": "Art" },
            "criteria": {}
        });

        let response = app
            .oneshot(post_json("/api/generate-feedback", &body))
            .await
            .unwrap();
        let json = read_json(response).await;
        assert_eq!(json["data"]["studentName"], "bBob/b");
    }

    #[tokio::test]
    async fn missing_fields_return_all_errors() {
        let app = make_test_app();
        let body = json!({ "studentData": {}, "criteria": {} });

        let response = app
            .oneshot(post_json("/api/generate-feedback", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = read_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation failed");
        assert_eq!(
            json["data"],
            json!([
                "name is required",
                "performance is required",
                "subject is required"
            ])
        );
    }

    #[tokio::test]
    async fn out_of_range_performance_is_rejected() {
        for performance in [150, -5] {
            let app = make_test_app();
            let body = json!({
                "studentData": { "name": "A", "performance": performance, "subject": "B" },
                "criteria": {}
            });

            let response = app
                .oneshot(post_json("/api/generate-feedback", &body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = read_json(response).await;
            assert_eq!(
                json["data"],
                json!(["Performance must be a number between 0 and 100"])
            );
        }
    }

    #[tokio::test]
    async fn invalid_criteria_is_rejected() {
        let app = make_test_app();
        let body = json!({
            "studentData": { "name": "A", "performance": 80, "subject": "B" },
            "criteria": { "rubric": [85, 70], "weight": 1.5 }
        });

        let response = app
            .oneshot(post_json("/api/generate-feedback", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = read_json(response).await;
        assert_eq!(
            json["data"],
            json!([
                "Rubric must be an object",
                "Weight must be a number between 0 and 1"
            ])
        );
    }

    #[tokio::test]
    async fn custom_rubric_is_ignored() {
        let app = make_test_app();
        let body = json!({
            "studentData": { "name": "A", "performance": 80, "subject": "B" },
            "criteria": { "rubric": { "excellence": 75, "good": 60, "improvement": 40 } }
        });

        let response = app
            .oneshot(post_json("/api/generate-feedback", &body))
            .await
            .unwrap();
        let json = read_json(response).await;
        assert_eq!(json["data"]["performanceLevel"], "good");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = make_test_app();
        let req = Request::builder()
            .method("POST")
            .uri("/api/generate-feedback")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = read_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn non_object_body_is_bad_request() {
        let app = make_test_app();

        let response = app
            .oneshot(post_json("/api/generate-feedback", &json!([1, 2, 3])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let config = ServerConfig {
            max_body_kb: 1,
            ..ServerConfig::default()
        };
        let app = make_test_app_with(config);
        let body = json!({
            "studentData": {
                "name": "A",
                "performance": 50,
                "subject": "B",
                "strengths": vec!["x".repeat(100); 20]
            },
            "criteria": {}
        });

        let response = app
            .oneshot(post_json("/api/generate-feedback", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn templates_are_listed_per_level() {
        let app = make_test_app();

        let response = app.oneshot(get("/api/feedback-templates")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let levels = json["data"].as_array().unwrap();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0]["level"], "excellent");
        assert_eq!(levels[0]["minScore"], 85.0);
        assert_eq!(levels[1]["level"], "good");
        assert_eq!(levels[1]["slots"], json!(["student", "topic", "areas"]));
        assert_eq!(levels[2]["level"], "needsImprovement");
        assert_eq!(
            levels[2]["template"],
            "{student} needs additional support in {topic}. Consider focusing on {recommendations}."
        );
    }
}
