use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RouteLogError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no visits found in document")]
    NoVisitsFound,

    #[error("failed to load facility table from {path}: {reason}")]
    FacilitiesLoad { path: PathBuf, reason: String },

    #[error("invalid facility table: {0}")]
    FacilitiesInvalid(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
