//! API error types

use chunkwise_core::CoreError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The tokenizer identifier is not recognized
    #[error("unknown tokenizer '{name}'")]
    UnknownTokenizer {
        /// The identifier that could not be resolved
        name: String,
    },

    /// The tokenizer could not be constructed
    #[error("tokenizer '{name}' is unavailable: {reason}")]
    TokenizerUnavailable {
        /// The identifier that was requested
        name: String,
        /// Why construction failed
        reason: String,
    },

    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
