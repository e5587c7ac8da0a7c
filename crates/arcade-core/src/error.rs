//! Error types for the Arcade core library.

use thiserror::Error;

/// Core error type for Arcade.
#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("Invalid catalog source: {0}")]
    InvalidSource(String),

    #[error("Game not found: {0}")]
    GameNotFound(String),
}

/// Result type alias for Arcade operations.
pub type Result<T> = std::result::Result<T, ArcadeError>;
