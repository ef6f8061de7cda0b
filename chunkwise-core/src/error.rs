//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The context window must hold at least one token
    #[error("context window size must be greater than zero")]
    InvalidContextWindow,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
