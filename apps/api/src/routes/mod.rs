pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/analyze-resume", post(handlers::handle_analyze_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use anyhow::Result;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use bytes::Bytes;
    use tower::util::ServiceExt;

    use super::*;
    use crate::extraction::MimeTextExtractor;
    use crate::models::analysis::{AnalysisRecord, AnalysisResult};
    use crate::storage::{FileStore, RecordStore};

    #[derive(Default)]
    struct MemoryFileStore {
        keys: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl FileStore for MemoryFileStore {
        async fn put(&self, key: &str, _data: Bytes, _content_type: &str) -> Result<String> {
            self.keys.lock().unwrap().push(key.to_string());
            Ok(format!("http://blob.test/{key}"))
        }
    }

    #[derive(Default)]
    struct MemoryRecordStore {
        count: Mutex<usize>,
    }

    #[async_trait]
    impl RecordStore for MemoryRecordStore {
        async fn insert(&self, _record: &AnalysisRecord) -> Result<()> {
            *self.count.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn test_state() -> AppState {
        AppState {
            extractor: Arc::new(MimeTextExtractor),
            file_store: Arc::new(MemoryFileStore::default()),
            record_store: Arc::new(MemoryRecordStore::default()),
        }
    }

    const BOUNDARY: &str = "test-boundary";

    fn multipart_body(field_name: &str, file_name: &str, content_type: &str, data: &str) -> Body {
        Body::from(format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {data}\r\n\
             --{BOUNDARY}--\r\n"
        ))
    }

    fn analyze_request(body: Body) -> Request<Body> {
        Request::post("/api/analyze-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(body)
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_resume_returns_analysis_json() {
        let app = build_router(test_state());
        let body = multipart_body(
            "resume",
            "resume.txt",
            "text/plain",
            "Skills: Rust Python SQL and more",
        );

        let response = app.oneshot(analyze_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: AnalysisResult = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.scores.len(), 6);
        assert!(result.scores["skills"] > 0);
    }

    #[tokio::test]
    async fn test_missing_resume_field_is_500_with_error_body() {
        let app = build_router(test_state());
        let body = multipart_body("attachment", "resume.txt", "text/plain", "whatever");

        let response = app.oneshot(analyze_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Failed to analyze resume");
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("No resume file provided"));
    }

    #[tokio::test]
    async fn test_unsupported_upload_type_is_500() {
        let app = build_router(test_state());
        let body = multipart_body("resume", "photo.png", "image/png", "not really a png");

        let response = app.oneshot(analyze_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
