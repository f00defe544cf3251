#[derive(Debug, thiserror::Error)]
pub enum PlanImportError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("malformed table layout on page {page}: {reason}")]
    Layout { page: usize, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no workouts extracted from PDF, check PDF format")]
    NoWorkouts,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
