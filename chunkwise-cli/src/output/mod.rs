//! Output formatting module

use crate::config::OutputConfig;
use anyhow::Result;
use chunkwise_api::{Chunk, Metadata};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single chunk
    fn format_chunk(&mut self, index: usize, chunk: &Chunk) -> Result<()>;

    /// Finalize output (e.g., close the JSON array or HTML document)
    fn finish(&mut self, metadata: &Metadata) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text chunks separated by header lines
    Text,
    /// JSON array of chunks with counts
    Json,
    /// Markdown sections, one per chunk
    Markdown,
    /// HTML page with palette-coloured chunk blocks
    Html,
}

impl OutputFormat {
    /// Name used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text chunks separated by header lines",
            OutputFormat::Json => "JSON array of chunks with token and sentence counts",
            OutputFormat::Markdown => "Markdown sections, one per chunk",
            OutputFormat::Html => "HTML page with palette-coloured chunk blocks",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    options: &OutputConfig,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            options.pretty_json,
            options.include_metadata,
        )),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
    }
}
