//! High-level configuration API

use crate::error::{ApiError, Result};
use crate::tokenizer::DEFAULT_TOKENIZER;
use chunkwise_core::PackConfig;

/// Configuration for chunk packing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Maximum tokens per chunk
    pub context_window_size: usize,
    /// Tokens carried from the end of one chunk into the next
    pub overlap_tokens: usize,
    /// Tokenizer identifier (model or encoding name)
    pub tokenizer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_window_size: PackConfig::DEFAULT_CONTEXT_WINDOW_SIZE,
            overlap_tokens: PackConfig::DEFAULT_OVERLAP_TOKENS,
            tokenizer: DEFAULT_TOKENIZER.to_string(),
        }
    }
}

impl Config {
    /// Window size used for previews and small-context models
    pub const COMPACT_CONTEXT_WINDOW_SIZE: usize = 1024;

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default configuration: 128k window, 200 overlap, gpt-4 tokenizer
    pub fn gpt4() -> Self {
        Self::default()
    }

    /// Small 1024-token window, handy for previewing chunk boundaries
    pub fn compact() -> Self {
        Self {
            context_window_size: Self::COMPACT_CONTEXT_WINDOW_SIZE,
            ..Self::default()
        }
    }

    /// Validated packing parameters
    pub fn pack_config(&self) -> Result<PackConfig> {
        Ok(PackConfig::new(
            self.context_window_size,
            self.overlap_tokens,
        )?)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the context window size in tokens
    pub fn context_window_size(mut self, size: usize) -> Self {
        self.config.context_window_size = size;
        self
    }

    /// Set the overlap carried between chunks in tokens
    pub fn overlap_tokens(mut self, overlap: usize) -> Self {
        self.config.overlap_tokens = overlap;
        self
    }

    /// Set the tokenizer identifier
    pub fn tokenizer(mut self, tokenizer: impl Into<String>) -> Self {
        self.config.tokenizer = tokenizer.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.context_window_size == 0 {
            return Err(ApiError::Config(
                "context window size must be greater than zero".to_string(),
            ));
        }
        if self.config.tokenizer.trim().is_empty() {
            return Err(ApiError::Config("tokenizer name is required".to_string()));
        }

        Ok(self.config)
    }
}
