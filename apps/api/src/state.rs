use std::sync::Arc;

use crate::extraction::TextExtractor;
use crate::storage::{FileStore, RecordStore};

/// Shared application state injected into all route handlers via Axum
/// extractors.
///
/// The extractor and both stores are trait objects, constructed once at
/// startup and passed in explicitly — tests substitute fakes without
/// touching handler or service code.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn TextExtractor>,
    pub file_store: Arc<dyn FileStore>,
    pub record_store: Arc<dyn RecordStore>,
}
