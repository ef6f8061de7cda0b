//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_api::{Chunk, Metadata};
use std::io::Write;

/// Plain text formatter - one header line per chunk, then its text
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, index: usize, chunk: &Chunk) -> Result<()> {
        if index > 0 {
            writeln!(self.writer)?;
        }
        let split = if chunk.is_sentence_split() {
            ", sentence split"
        } else {
            ""
        };
        writeln!(
            self.writer,
            "--- chunk {} ({} tokens, {} overlap{}) ---",
            index + 1,
            chunk.token_count,
            chunk.overlap_token_count,
            split
        )?;
        writeln!(self.writer, "{}", chunk.text)?;
        Ok(())
    }

    fn finish(&mut self, _metadata: &Metadata) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
