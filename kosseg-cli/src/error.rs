//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// Patterns were given but matched no files
    NoFilesMatched,
    /// Chunk length of zero can never hold a sentence
    InvalidChunkLength,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoFilesMatched => {
                write!(f, "No files found matching the provided patterns")
            }
            CliError::InvalidChunkLength => {
                write!(f, "Chunk length must be greater than zero")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
