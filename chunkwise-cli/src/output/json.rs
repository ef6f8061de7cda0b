//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_api::{Chunk, Metadata};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array
///
/// With metadata enabled the array is wrapped in an object alongside the
/// run summary.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_metadata: bool,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Position of the chunk in the document
    pub index: usize,
    /// Chunk text
    pub text: String,
    /// Tokens in the chunk
    pub token_count: usize,
    /// Leading tokens repeated from the previous chunk
    pub overlap_token_count: usize,
    /// Whole paragraphs in the chunk
    pub paragraph_count: usize,
    /// Sentences in the chunk
    pub sentence_count: usize,
}

#[derive(Serialize)]
struct Envelope<'a> {
    chunks: &'a [ChunkData],
    metadata: &'a Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool, include_metadata: bool) -> Self {
        Self {
            writer,
            pretty,
            include_metadata,
            chunks: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, index: usize, chunk: &Chunk) -> Result<()> {
        self.chunks.push(ChunkData {
            index,
            text: chunk.text.clone(),
            token_count: chunk.token_count,
            overlap_token_count: chunk.overlap_token_count,
            paragraph_count: chunk.paragraph_count,
            sentence_count: chunk.sentence_count,
        });
        Ok(())
    }

    fn finish(&mut self, metadata: &Metadata) -> Result<()> {
        let chunks = std::mem::take(&mut self.chunks);
        if self.include_metadata {
            self.write_value(&Envelope {
                chunks: &chunks,
                metadata,
            })?;
        } else {
            self.write_value(&chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
