use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SkissError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("unsupported input '{path}': expected a .pdf, a .txt or a directory of PDFs")]
    UnsupportedInput { path: PathBuf },

    #[error("output does not match the outline schema: {0}")]
    InvalidOutput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
