//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Context window: {} tokens",
                    config.chunking.context_window_size
                );
                println!("  Overlap: {} tokens", config.chunking.overlap_tokens);
                println!("  Tokenizer: {}", config.chunking.tokenizer);
                println!("  Output format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }

    fn check(path: &std::path::Path) -> Result<CliConfig> {
        let config = CliConfig::from_file(path)?;
        config.chunking.pack_config()?;
        if config.chunking.overlap_tokens >= config.chunking.context_window_size {
            println!("  Warning: overlap is not smaller than the context window");
        }
        chunkwise_api::get_token_service(&config.chunking.tokenizer)?;
        config.output.format()?;
        Ok(config)
    }
}
