//! Error types for bandpage
//!
//! Defines the crate-wide error type using thiserror for clear error
//! propagation. The Gemini client keeps its own error enum and converts
//! into this one at the refresh boundary.

use thiserror::Error;

/// Main error type for bandpage
#[derive(Error, Debug)]
pub enum Error {
    /// Library file I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Library file parse or serialization errors
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generative-text API errors
    #[error("Gemini error: {0}")]
    Gemini(#[from] crate::gemini::GeminiError),
}

/// Convenience Result type using the bandpage Error
pub type Result<T> = std::result::Result<T, Error>;
