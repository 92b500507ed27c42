use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid version code: {0}")]
    InvalidVersionCode(String),

    #[error("Invalid level: {0} (must be 1-12)")]
    InvalidLevel(u8),

    #[error("Invalid score kind: {0}")]
    InvalidScoreKind(String),

    #[error("Invalid play side: {0}")]
    InvalidPlaySide(u64),

    #[error("Invalid lane digit: {0}")]
    InvalidLane(u64),

    #[error("Malformed filter string: {0:?}")]
    MalformedFilter(String),

    #[error("Invalid filter range: {start:?}-{end:?}")]
    InvalidRange { start: String, end: String },

    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid note record at index {index}: {value}")]
    InvalidNoteRecord { index: usize, value: String },

    #[error("Invalid catalog record: {0}")]
    InvalidCatalogRecord(String),

    #[error("Invalid score page URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
