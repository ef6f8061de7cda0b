//! Public API for chunkwise text chunking
//!
//! This crate wires the core packing algorithm to real tokenizers and
//! provides a stable interface for callers that only have raw text.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod tokenizer;

use chunkwise_core::{PackConfig, Packer, TokenService};
use error::Result;
use std::sync::Arc;
use std::time::Instant;

// Re-export key types
pub use chunkwise_core::Chunk;
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output};
pub use error::ApiError;
pub use tokenizer::{available_tokenizers, get_token_service, DEFAULT_TOKENIZER};

/// Main entry point for chunk packing
///
/// Holds a resolved tokenizer, so one instance can pack any number of
/// documents, from any number of threads.
pub struct ChunkPacker {
    service: Arc<dyn TokenService>,
    pack_config: PackConfig,
    config: Config,
}

impl ChunkPacker {
    /// Create a packer with default configuration (128k window, gpt-4)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a packer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let service = get_token_service(&config.tokenizer).map_err(|e| match e {
            ApiError::UnknownTokenizer { name } => ApiError::TokenizerUnavailable {
                reason: format!("'{name}' is not a known model or encoding"),
                name,
            },
            other => other,
        })?;
        Self::with_service(config, service)
    }

    /// Create a packer around an already constructed token service
    pub fn with_service(config: Config, service: Arc<dyn TokenService>) -> Result<Self> {
        let pack_config = config.pack_config()?;
        Ok(Self {
            service,
            pack_config,
            config,
        })
    }

    /// Pack input and return chunks with run metadata
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.read_text()?;
        Ok(self.pack_text(&text))
    }

    /// Pack text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        Ok(self.pack_text(text))
    }

    /// Pack text and return only the chunks
    pub fn chunks(&self, text: &str) -> Vec<Chunk> {
        Packer::new(self.pack_config, self.service.as_ref()).pack(text)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the token service chunks are measured with
    pub fn token_service(&self) -> &dyn TokenService {
        self.service.as_ref()
    }

    fn pack_text(&self, text: &str) -> Output {
        let start = Instant::now();
        let chunks = self.chunks(text);
        let elapsed = start.elapsed();

        let window = self.pack_config.context_window_size();
        let overflow_chunks = chunks.iter().filter(|c| c.is_overflow(window)).count();
        if overflow_chunks > 0 {
            log::debug!("{overflow_chunks} chunks exceed the {window} token window");
        }

        let metadata = Metadata {
            total_chunks: chunks.len(),
            total_tokens: chunks.iter().map(|c| c.token_count).sum(),
            overflow_chunks,
            context_window_size: window,
            overlap_tokens: self.pack_config.overlap_tokens(),
            tokenizer: self.service.name().to_string(),
            total_bytes: text.len(),
            processing_time_ms: elapsed.as_millis() as u64,
        };

        Output { chunks, metadata }
    }
}

impl std::fmt::Debug for ChunkPacker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkPacker")
            .field("tokenizer", &self.service.name())
            .field("config", &self.config)
            .finish()
    }
}

// Convenience functions

/// Split text with default configuration
pub fn split_text(text: &str) -> Result<Vec<Chunk>> {
    let packer = ChunkPacker::new()?;
    Ok(packer.chunks(text))
}

/// Split text with an explicit window, overlap and tokenizer
pub fn split_text_with(
    text: &str,
    context_window_size: usize,
    overlap_tokens: usize,
    tokenizer: &str,
) -> Result<Vec<Chunk>> {
    let config = Config::builder()
        .context_window_size(context_window_size)
        .overlap_tokens(overlap_tokens)
        .tokenizer(tokenizer)
        .build()?;
    let packer = ChunkPacker::with_config(config)?;
    Ok(packer.chunks(text))
}

/// Pack a file with default configuration
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    let packer = ChunkPacker::new()?;
    packer.process(Input::from_file(path.as_ref().to_path_buf()))
}
