//! CLI command implementations for Landgrab.

pub(crate) mod count;
pub(crate) mod play;
pub(crate) mod strategies;

mod config;
mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

use landgrab::{PipelineError, RulesError};

/// Output format for the `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Enumeration mode for the `count` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CountMode {
    /// Walk the candidates on this thread.
    Sequential,
    /// Check candidates on the rayon pool.
    Parallel,
    /// Stream plays through the worker pipeline.
    Stream,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<RulesError> for CliError {
    fn from(e: RulesError) -> Self {
        Self::new(format!("invalid rules: {e}"))
    }
}

impl From<PipelineError> for CliError {
    fn from(e: PipelineError) -> Self {
        Self::new(e.to_string())
    }
}
