//! Error types for the signup board frontend

/// Errors that can occur while loading or rendering the signup sheet
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document error: {0}")]
    Dom(String),
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
