//! Error types for rule engine runs

use thiserror::Error;

/// Failure reported by an injected glossary matcher
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("glossary lookup failed: {0}")]
pub struct GlossaryError(pub String);

impl GlossaryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Glossary matcher failure, propagated unchanged
    #[error(transparent)]
    Glossary(#[from] GlossaryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
