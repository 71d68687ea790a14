// Resume analysis pipeline: pure section scoring plus the upload
// orchestration that wires extraction and persistence around it.

pub mod handlers;
pub mod scorer;
pub mod service;
