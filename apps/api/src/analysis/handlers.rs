use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::analysis::service::{analyze_and_store, ResumeUpload};
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

/// POST /api/analyze-resume
///
/// Multipart form body with a single file field named `resume`. The picker's
/// extension allow-list is a UI hint only — nothing is enforced here beyond
/// what the extractor can read.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        if field.name() != Some("resume") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Multipart(e.to_string()))?;

        let upload = ResumeUpload {
            file_name,
            content_type,
            data,
        };
        let analysis = analyze_and_store(
            &state.extractor,
            &state.file_store,
            &state.record_store,
            upload,
        )
        .await?;
        return Ok(Json(analysis));
    }

    Err(AppError::Multipart("No resume file provided".to_string()))
}
