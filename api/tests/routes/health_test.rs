#[cfg(test)]
mod tests {
    use crate::helpers::app::get;
    use crate::helpers::{make_test_app, read_json};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let app = make_test_app();

        let response = app.oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["status"], "healthy");
        assert_eq!(json["message"], "Health check passed");
    }
}
