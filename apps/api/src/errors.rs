use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid upload: {0}")]
    Multipart(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let details = match &self {
            AppError::Multipart(msg) => {
                tracing::error!("Multipart error: {msg}");
                msg.clone()
            }
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                msg.clone()
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                msg.clone()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                e.to_string()
            }
        };

        // Every failure class collapses to the same generic 500 payload;
        // the caller only distinguishes errors by the details string.
        let body = Json(json!({
            "error": "Failed to analyze resume",
            "details": details
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_variant_collapses_to_500() {
        let errors = [
            AppError::Multipart("bad body".to_string()),
            AppError::Extraction("unreadable".to_string()),
            AppError::Storage("quota".to_string()),
            AppError::Internal(anyhow::anyhow!("boom")),
        ];
        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_body_carries_error_and_details() {
        let response = AppError::Extraction("unsupported format".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Failed to analyze resume");
        assert_eq!(body["details"], "unsupported format");
    }
}
