use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use bytes::Bytes;

/// Converts an uploaded binary blob plus its declared MIME type into plain
/// text. Carried in `AppState` as `Arc<dyn TextExtractor>` so tests can
/// substitute a fake.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: Bytes, content_type: &str) -> Result<String>;
}

/// Production extractor, dispatching on the declared MIME type.
///
/// The client-side picker admits more extensions than this list (doc, docx,
/// images); those reach the server but are rejected here and surface as an
/// extraction failure to the caller.
pub struct MimeTextExtractor;

#[async_trait]
impl TextExtractor for MimeTextExtractor {
    async fn extract(&self, data: Bytes, content_type: &str) -> Result<String> {
        match content_type {
            "application/pdf" => {
                // pdf-extract is synchronous and CPU-bound; keep it off the
                // async runtime.
                let text = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&data)
                        .map_err(|e| anyhow!("PDF extraction error: {e}"))
                })
                .await
                .context("extraction worker panicked")??;
                Ok(text)
            }
            "text/plain" | "text/rtf" | "application/rtf" => {
                Ok(String::from_utf8_lossy(&data).into_owned())
            }
            other => Err(anyhow!("Unsupported file type: {other}")),
        }
    }
}
