//! Error types for modsplit.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Modsplit error types.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed plan file
    #[error("Plan error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid plan contents
    #[error("Invalid plan: {0}")]
    Plan(String),
}
