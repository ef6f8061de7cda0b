//! Paragraph-aware text chunking for LLM context windows
//!
//! This crate splits plain-text documents into chunks that fit a token
//! budget. Paragraphs are packed greedily; a paragraph that cannot fit is
//! packed sentence by sentence; the trailing tokens of every closed chunk are
//! carried into the next one so consumers keep cross-chunk context.
//!
//! # Architecture
//!
//! - [`paragraph`]: blank-line paragraph splitting
//! - [`sentence`]: punctuation-based sentence segmentation
//! - [`packer`]: greedy packing with overlap carry-forward
//! - [`token`]: the [`TokenService`] seam the packer measures text through
//!
//! # Example
//!
//! ```rust
//! use chunkwise_core::{pack, CharTokenizer, PackConfig};
//!
//! let config = PackConfig::new(64, 8).unwrap();
//! let text = "Hello world. This is a test.\n\nA second paragraph.";
//! let chunks = pack(text, &config, &CharTokenizer);
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].paragraph_count, 2);
//! ```

#![warn(missing_docs)]

pub mod chunk;
pub mod error;
pub mod packer;
pub mod paragraph;
pub mod sentence;
pub mod token;

pub use chunk::Chunk;
pub use error::{CoreError, Result};
pub use packer::{pack, ChunkAccumulator, PackConfig, Packer};
pub use paragraph::{normalize_line_endings, split_paragraphs};
pub use sentence::{count_sentences, split_sentences};
pub use token::{CharTokenizer, TokenId, TokenService};
