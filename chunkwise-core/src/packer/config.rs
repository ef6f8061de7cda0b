//! Packing configuration

use crate::error::{CoreError, Result};

/// Token budget and overlap for one packing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    context_window_size: usize,
    overlap_tokens: usize,
}

impl PackConfig {
    /// Default context window, in tokens
    pub const DEFAULT_CONTEXT_WINDOW_SIZE: usize = 128_000;
    /// Default overlap carried between chunks, in tokens
    pub const DEFAULT_OVERLAP_TOKENS: usize = 200;

    /// Create a configuration, rejecting a zero-sized window.
    ///
    /// An overlap that is not smaller than the window is accepted; the seed is
    /// shortened whenever it would leave no room for the next sentence.
    pub fn new(context_window_size: usize, overlap_tokens: usize) -> Result<Self> {
        if context_window_size == 0 {
            return Err(CoreError::InvalidContextWindow);
        }
        if overlap_tokens >= context_window_size {
            log::warn!(
                "overlap of {overlap_tokens} tokens is not smaller than the \
                 {context_window_size}-token context window"
            );
        }

        Ok(Self {
            context_window_size,
            overlap_tokens,
        })
    }

    /// Maximum tokens per chunk, barring accepted overflow
    pub fn context_window_size(&self) -> usize {
        self.context_window_size
    }

    /// Tokens carried from the end of one chunk into the next
    pub fn overlap_tokens(&self) -> usize {
        self.overlap_tokens
    }

    /// Whether overlap is carried at all
    pub fn overlap_enabled(&self) -> bool {
        self.overlap_tokens > 0
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            context_window_size: Self::DEFAULT_CONTEXT_WINDOW_SIZE,
            overlap_tokens: Self::DEFAULT_OVERLAP_TOKENS,
        }
    }
}
