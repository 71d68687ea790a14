use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of scoring one resume. Built once per request and never mutated;
/// serialized verbatim as the response body and embedded in the persisted
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Rounded mean of the six section scores, 0–100.
    pub overall_score: u32,
    /// Always contains exactly the six fixed section keys.
    pub scores: BTreeMap<String, u32>,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Row written once to `resume_analyses`. Never updated or read back by
/// this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub file_name: String,
    pub blob_url: String,
    pub analysis: AnalysisResult,
    pub created_at: DateTime<Utc>,
}
