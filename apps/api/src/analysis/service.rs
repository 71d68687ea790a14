use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::analysis::scorer::analyze_resume_text;
use crate::errors::AppError;
use crate::extraction::TextExtractor;
use crate::models::analysis::{AnalysisRecord, AnalysisResult};
use crate::storage::{FileStore, RecordStore};

/// One uploaded resume, as pulled out of the multipart body.
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Runs the full pipeline: extract text, score it, persist the original
/// file and the analysis record, return the result. Each step aborts the
/// request on failure.
///
/// The blob put and the record insert are not transactional: a failure
/// between them leaves an orphaned blob with no row. The insert failure is
/// logged with the blob key so the object can be swept manually.
pub async fn analyze_and_store(
    extractor: &Arc<dyn TextExtractor>,
    file_store: &Arc<dyn FileStore>,
    record_store: &Arc<dyn RecordStore>,
    upload: ResumeUpload,
) -> Result<AnalysisResult, AppError> {
    let text = extractor
        .extract(upload.data.clone(), &upload.content_type)
        .await
        .map_err(|e| AppError::Extraction(e.to_string()))?;
    info!(
        "Extracted {} characters from {}",
        text.len(),
        upload.file_name
    );

    let analysis = analyze_resume_text(&text);
    info!(
        "Scored {}: overall {}",
        upload.file_name, analysis.overall_score
    );

    // Timestamp-keyed: re-submitting the same file always creates a new blob.
    let key = format!(
        "resumes/{}-{}",
        Utc::now().timestamp_millis(),
        upload.file_name
    );
    let blob_url = file_store
        .put(&key, upload.data, &upload.content_type)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    let record = AnalysisRecord {
        id: Uuid::new_v4(),
        file_name: upload.file_name,
        blob_url,
        analysis: analysis.clone(),
        created_at: Utc::now(),
    };
    if let Err(e) = record_store.insert(&record).await {
        error!("Record insert failed; orphaned blob at {key}: {e}");
        return Err(AppError::Internal(e));
    }

    Ok(analysis)
}
