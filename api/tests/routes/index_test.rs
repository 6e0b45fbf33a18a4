#[cfg(test)]
mod tests {
    use crate::helpers::app::get;
    use crate::helpers::{make_test_app, make_test_app_with, read_json};
    use axum::http::StatusCode;
    use common::config::ServerConfig;
    use tower::ServiceExt;

    #[tokio::test]
    async fn index_lists_endpoints() {
        let config = ServerConfig {
            project_name: "feedback-test".into(),
            ..ServerConfig::default()
        };
        let app = make_test_app_with(config);

        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["data"]["name"], "feedback-test");
        assert_eq!(json["data"]["status"], "active");
        assert_eq!(
            json["data"]["endpoints"]["generate_feedback"],
            "/api/generate-feedback"
        );
    }

    #[tokio::test]
    async fn unknown_path_returns_json_404() {
        let app = make_test_app();

        let response = app.oneshot(get("/api/does-not-exist")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = read_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "The requested endpoint does not exist");
    }
}
