use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use sqlx::PgPool;
use tracing::info;

use crate::models::analysis::AnalysisRecord;

/// Object store for raw resume files.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Stores `data` under `key` and returns a resolvable URL for it.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> Result<String>;
}

/// Document store for analysis records. Write-once; nothing in this service
/// reads the rows back.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: &AnalysisRecord) -> Result<()>;
}

/// S3-backed file store (MinIO locally, AWS in production).
pub struct S3FileStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
}

impl S3FileStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, endpoint: String) -> Self {
        Self {
            client,
            bucket,
            endpoint,
        }
    }
}

#[async_trait]
impl FileStore for S3FileStore {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> Result<String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| anyhow!("S3 upload failed: {e}"))?;

        info!("Uploaded resume to s3://{}/{}", self.bucket, key);
        Ok(format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.bucket,
            key
        ))
    }
}

/// PostgreSQL-backed record store. One append-only INSERT per analysis.
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, record: &AnalysisRecord) -> Result<()> {
        let analysis =
            serde_json::to_value(&record.analysis).context("serialize analysis payload")?;

        sqlx::query(
            r#"
            INSERT INTO resume_analyses (id, file_name, blob_url, analysis, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id)
        .bind(&record.file_name)
        .bind(&record.blob_url)
        .bind(&analysis)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        info!(
            "Inserted analysis record {} for {}",
            record.id, record.file_name
        );
        Ok(())
    }
}
