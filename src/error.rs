//! Error types for pagecraft operations.
//!
//! Rendering itself is total; errors only come from the edges (reading
//! input, writing output, serializing).

use thiserror::Error;

/// Errors that can occur while loading input or emitting output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(any(feature = "cli", feature = "wasm"))]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
