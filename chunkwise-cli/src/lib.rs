//! chunkwise CLI library
//!
//! This library provides the command-line interface for packing text
//! documents into token-budgeted chunks.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
