//! HTML preview formatter
//!
//! Renders each chunk as a coloured block so chunk boundaries are easy to
//! eyeball in a browser.

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_api::{Chunk, Metadata};
use std::io::Write;

/// Block backgrounds, picked by `paragraph_count % PALETTE.len()`
pub const PALETTE: [&str; 10] = [
    "linear-gradient(135deg, #f6d365 0%, #fda085 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #5ee7df 0%, #b490ca 100%)",
    "linear-gradient(135deg, #c3cfe2 0%, #c3cfe2 100%)",
    "linear-gradient(135deg, #f6d365 0%, #fda085 100%)",
    "rgb(255, 99, 132)",
    "rgb(54, 162, 235)",
    "rgb(255, 206, 86)",
    "rgb(75, 192, 192)",
    "rgb(153, 102, 255)",
];

/// Background for a chunk with the given paragraph count
pub fn palette_background(paragraph_count: usize) -> &'static str {
    PALETTE[paragraph_count % PALETTE.len()]
}

/// Escape text for use inside HTML element content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML formatter - one styled block per chunk
pub struct HtmlFormatter<W: Write> {
    writer: W,
    started: bool,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            started: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.started {
            writeln!(self.writer, "<!DOCTYPE html>")?;
            writeln!(self.writer, "<html>")?;
            writeln!(self.writer, "<head><meta charset=\"utf-8\"><title>Chunks</title></head>")?;
            writeln!(self.writer, "<body>")?;
            self.started = true;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for HtmlFormatter<W> {
    fn format_chunk(&mut self, index: usize, chunk: &Chunk) -> Result<()> {
        self.write_header()?;
        writeln!(
            self.writer,
            "<div class=\"chunk\" data-index=\"{}\" title=\"{} tokens\" \
             style=\"background: {}; padding: 10px; border-radius: 5px; \
             margin-bottom: 10px; white-space: pre-wrap;\">{}</div>",
            index,
            chunk.token_count,
            palette_background(chunk.paragraph_count),
            escape_html(&chunk.text)
        )?;
        Ok(())
    }

    fn finish(&mut self, metadata: &Metadata) -> Result<()> {
        self.write_header()?;
        writeln!(
            self.writer,
            "<p>{} chunks, {} tokens, window {}</p>",
            metadata.total_chunks, metadata.total_tokens, metadata.context_window_size
        )?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}
