//! Error types for parsing and emitting YAML documents.

use crate::SourceInfo;
use thiserror::Error;

/// Result type alias for yavl-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing YAML text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// YAML syntax error reported by the scanner
    #[error("Parse error: {message}")]
    ParseError {
        message: String,
        location: Option<SourceInfo>,
    },

    /// A mapping declares the same key more than once
    #[error("Duplicate key \"{key}\" at line {}, column {}", location.line, location.col)]
    DuplicateKey { key: String, location: SourceInfo },

    /// The emitter could not render a tree back to text
    #[error("Emit error: {message}")]
    EmitError { message: String },
}

impl Error {
    /// Source location of the error, when one is known.
    pub fn location(&self) -> Option<&SourceInfo> {
        match self {
            Error::ParseError { location, .. } => location.as_ref(),
            Error::DuplicateKey { location, .. } => Some(location),
            Error::EmitError { .. } => None,
        }
    }
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        let marker = err.marker();
        Error::ParseError {
            message: err.info().to_string(),
            location: Some(SourceInfo::from_marker(marker, 0)),
        }
    }
}

impl From<yaml_rust2::EmitError> for Error {
    fn from(err: yaml_rust2::EmitError) -> Self {
        Error::EmitError {
            message: err.to_string(),
        }
    }
}
