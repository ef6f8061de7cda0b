//! Document reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use chunkwise_api::Input;
use std::fs;
use std::io;
use std::path::Path;

/// Input argument that selects standard input
pub const STDIN_SOURCE: &str = "-";

/// File reader for document inputs
pub struct FileReader;

impl FileReader {
    /// Read a file's raw bytes; UTF-8 is checked when the input is packed
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }
}

/// Resolve `source` to a packer input, `-` meaning standard input
pub fn read_input(source: &str) -> Result<Input> {
    if source == STDIN_SOURCE {
        log::debug!("Reading document from stdin");
        Ok(Input::from_reader(io::stdin()))
    } else {
        log::debug!("Reading document from {source}");
        Ok(Input::from_bytes(FileReader::read_bytes(Path::new(source))?))
    }
}
