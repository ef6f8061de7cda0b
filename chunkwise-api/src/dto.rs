//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use chunkwise_core::Chunk;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for packing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Packing result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Chunks in document order
    pub chunks: Vec<Chunk>,
    /// Summary of the packing run
    pub metadata: Metadata,
}

/// Summary of one packing run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Number of chunks produced
    pub total_chunks: usize,
    /// Sum of chunk token counts, overlap included
    pub total_tokens: usize,
    /// Chunks whose single sentence exceeded the window
    pub overflow_chunks: usize,
    /// Context window the document was packed into
    pub context_window_size: usize,
    /// Overlap configured between chunks
    pub overlap_tokens: usize,
    /// Tokenizer that measured the chunks
    pub tokenizer: String,
    /// Input size in bytes
    pub total_bytes: usize,
    /// Wall-clock packing time
    pub processing_time_ms: u64,
}

impl Output {
    /// Chunks that exceed the configured window
    pub fn overflow_chunks(&self) -> impl Iterator<Item = &Chunk> {
        let window = self.metadata.context_window_size;
        self.chunks.iter().filter(move |c| c.is_overflow(window))
    }

    /// Chunk texts in document order
    pub fn texts(&self) -> Vec<&str> {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }
}
