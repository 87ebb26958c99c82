//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures
#[derive(Debug)]
pub enum CliError {
    /// Input file missing or unreadable
    FileNotFound(String),
    /// Input pattern matched nothing or is not a valid glob
    InvalidPattern(String),
    /// Project configuration could not be used
    ConfigError(String),
    /// Extension is not one of the bilingual formats
    UnsupportedFileType(String),
    /// Parsing or checking failed for one or more inputs
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid input pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnsupportedFileType(path) => {
                write!(f, "Unsupported file type: {path} (expected .xlf, .xliff or .sdlxliff)")
            }
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
