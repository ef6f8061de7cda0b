//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::read_input;
use crate::output::{create_formatter, OutputFormat};
use anyhow::{Context, Result};
use chunkwise_api::{ApiError, ChunkPacker, Config, Output};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input file, or `-` to read standard input
    #[arg(short, long, value_name = "FILE")]
    pub input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum tokens per chunk
    #[arg(short = 'w', long = "context-window", value_name = "TOKENS")]
    pub context_window: Option<usize>,

    /// Tokens carried from the end of one chunk into the next
    #[arg(long, value_name = "TOKENS")]
    pub overlap: Option<usize>,

    /// Tokenizer model or encoding name
    #[arg(short, long, value_name = "NAME", env = "CHUNKWISE_TOKENIZER")]
    pub tokenizer: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting chunking");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => cli_config.output.format()?,
        };
        let config = self.effective_config(&cli_config.chunking)?;

        let input = read_input(&self.input)?;
        let packer = ChunkPacker::with_config(config)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        let output = packer.process(input).map_err(|e| match e {
            ApiError::Utf8(e) => CliError::InvalidInput(format!("input is not valid UTF-8: {e}")),
            other => CliError::ProcessingError(other.to_string()),
        })?;

        log::info!(
            "Packed {} bytes into {} chunks in {}ms",
            output.metadata.total_bytes,
            output.metadata.total_chunks,
            output.metadata.processing_time_ms
        );
        if output.metadata.overflow_chunks > 0 {
            log::warn!(
                "{} chunks hold a single sentence longer than the {} token window",
                output.metadata.overflow_chunks,
                output.metadata.context_window_size
            );
        }

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        write_output(&output, format, writer, &cli_config)
    }

    /// Apply command-line overrides on top of the configured values
    fn effective_config(&self, base: &Config) -> Result<Config> {
        Config::builder()
            .context_window_size(self.context_window.unwrap_or(base.context_window_size))
            .overlap_tokens(self.overlap.unwrap_or(base.overlap_tokens))
            .tokenizer(self.tokenizer.as_deref().unwrap_or(&base.tokenizer))
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // Tests may run several commands in one process
        let _ =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init();
    }
}

fn write_output(
    output: &Output,
    format: OutputFormat,
    writer: Box<dyn Write>,
    config: &CliConfig,
) -> Result<()> {
    let mut formatter = create_formatter(format, writer, &config.output);
    for (index, chunk) in output.chunks.iter().enumerate() {
        formatter.format_chunk(index, chunk)?;
    }
    formatter.finish(&output.metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> ProcessArgs {
        ProcessArgs {
            input: input.to_string(),
            output: None,
            format: None,
            context_window: None,
            overlap: None,
            tokenizer: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut process = args("doc.txt");
        process.context_window = Some(64);
        process.tokenizer = Some("char".to_string());

        let base = Config::compact();
        let config = process.effective_config(&base).unwrap();
        assert_eq!(config.context_window_size, 64);
        assert_eq!(config.overlap_tokens, base.overlap_tokens);
        assert_eq!(config.tokenizer, "char");
    }

    #[test]
    fn test_zero_window_is_config_error() {
        let mut process = args("doc.txt");
        process.context_window = Some(0);

        let error = process.effective_config(&Config::default()).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("doc.txt");
        let output = temp_dir.path().join("chunks.json");
        fs::write(&input, "First paragraph.\n\nSecond paragraph.").unwrap();

        let mut process = args(input.to_str().unwrap());
        process.output = Some(output.clone());
        process.format = Some(OutputFormat::Json);
        process.tokenizer = Some("char".to_string());
        process.context_window = Some(20);
        process.overlap = Some(0);
        process.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let chunks = value.as_array().unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0]["text"], "First paragraph.");
        assert_eq!(chunks[1]["text"], "Second paragraph.");
    }

    #[test]
    fn test_execute_missing_input() {
        let error = args("/nonexistent/chunkwise.txt").execute().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("binary.bin");
        fs::write(&input, [0x66, 0xff, 0xfe]).unwrap();

        let mut process = args(input.to_str().unwrap());
        process.tokenizer = Some("char".to_string());

        let error = process.execute().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_tokenizer_is_processing_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("doc.txt");
        fs::write(&input, "Text.").unwrap();

        let mut process = args(input.to_str().unwrap());
        process.tokenizer = Some("no-such-model".to_string());

        let error = process.execute().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ProcessingError(_))
        ));
    }
}
