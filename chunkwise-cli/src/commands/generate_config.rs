//! Generate config command implementation

use anyhow::{Context, Result};
use chunkwise_api::Config;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Start from the compact 1024-token preset
    #[arg(long)]
    pub compact: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Adjust the window, overlap and tokenizer for your model");
        println!("2. Validate your configuration:");
        println!("   chunkwise validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   chunkwise process -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let preset = if self.compact {
            Config::compact()
        } else {
            Config::default()
        };

        format!(
            r#"# chunkwise configuration

[chunking]
# Maximum tokens per chunk
context_window_size = {}

# Tokens from the end of each chunk repeated at the start of the next
overlap_tokens = {}

# Model name (gpt-4, gpt-4o, ...) or encoding name (cl100k_base, o200k_base, ...)
# Use "char" to count Unicode scalar values instead of BPE tokens
tokenizer = "{}"

[output]
# One of: text, json, markdown, html
default_format = "text"

# Wrap JSON output in an object that also carries run metadata
include_metadata = false

# Indent JSON output
pretty_json = true
"#,
            preset.context_window_size, preset.overlap_tokens, preset.tokenizer
        )
    }
}
