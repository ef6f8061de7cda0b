//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_api::{Chunk, Metadata};
use std::io::Write;

/// Markdown formatter - one section per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, index: usize, chunk: &Chunk) -> Result<()> {
        if chunk.is_sentence_split() {
            writeln!(self.writer, "## Chunk {} (sentence split)", index + 1)?;
        } else {
            writeln!(self.writer, "## Chunk {}", index + 1)?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*{} tokens, {} overlap, {} paragraphs, {} sentences*",
            chunk.token_count,
            chunk.overlap_token_count,
            chunk.paragraph_count,
            chunk.sentence_count
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", chunk.text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self, metadata: &Metadata) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total chunks: {}, total tokens: {}*",
            metadata.total_chunks, metadata.total_tokens
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
