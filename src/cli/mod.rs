//! CLI command implementations for gamma.

pub(crate) mod batch;
pub(crate) mod input;
pub(crate) mod interactive;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// Output format for the end-of-game summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SummaryFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
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

impl From<gamma::GameError> for CliError {
    fn from(e: gamma::GameError) -> Self {
        Self::new(e.to_string())
    }
}
