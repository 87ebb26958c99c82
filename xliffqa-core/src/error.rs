//! Parser error taxonomy
//!
//! Every failure crossing the parser boundary is one of four codes, each with
//! a human-readable message and a details string naming the offending value.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Closed set of parser failure codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParserErrorCode {
    /// Input exceeds the byte ceiling
    FileTooLarge,
    /// Input is not well-formed XML
    InvalidXml,
    /// Required XLIFF construct is missing
    InvalidStructure,
    /// Paired inline tag without its counterpart
    TagMismatch,
}

impl ParserErrorCode {
    /// Wire name of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserErrorCode::FileTooLarge => "FILE_TOO_LARGE",
            ParserErrorCode::InvalidXml => "INVALID_XML",
            ParserErrorCode::InvalidStructure => "INVALID_STRUCTURE",
            ParserErrorCode::TagMismatch => "TAG_MISMATCH",
        }
    }
}

impl fmt::Display for ParserErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by document parsing and inline-tag extraction
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message} ({details})")]
pub struct ParserError {
    /// Failure code
    pub code: ParserErrorCode,
    /// Human-readable summary
    pub message: String,
    /// Exact size, missing construct or offending tag id
    pub details: String,
}

impl ParserError {
    /// Create an error from its parts
    pub fn new(
        code: ParserErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn file_too_large(size: usize, limit: usize) -> Self {
        Self::new(
            ParserErrorCode::FileTooLarge,
            "File exceeds the maximum allowed size",
            format!("size: {size} bytes, limit: {limit} bytes"),
        )
    }

    pub fn invalid_xml(details: impl Into<String>) -> Self {
        Self::new(
            ParserErrorCode::InvalidXml,
            "Document is not well-formed XML",
            details,
        )
    }

    /// A required element is missing; `construct` names it (e.g. `<file>`)
    pub fn invalid_structure(construct: impl Into<String>) -> Self {
        let construct = construct.into();
        Self::new(
            ParserErrorCode::InvalidStructure,
            format!("Missing required {construct} element"),
            construct,
        )
    }

    /// A paired tag could not be matched; `id` is the offending tag id
    pub fn tag_mismatch(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(ParserErrorCode::TagMismatch, message, id)
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParserError>;
