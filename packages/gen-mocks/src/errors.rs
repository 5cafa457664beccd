//! Error types for gen-mocks
//!
//! Provides unified error handling across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for mock generation
#[derive(Debug, Error)]
pub enum GenMocksError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (reported before any work starts)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid interface name pattern
    #[error("Invalid interface pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generated declarations could not be rendered
    #[error("Render error: {0}")]
    Render(String),

    /// A package qualifier used by the generated code has no known import
    #[error("{}: could not resolve import for package {qualifier:?}", path.display())]
    ImportResolution { path: PathBuf, qualifier: String },

    /// External import processor failed
    #[error("Import processing failed for {}: {message}", path.display())]
    ImportProcess { path: PathBuf, message: String },
}

impl GenMocksError {
    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        GenMocksError::Parse(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        GenMocksError::Internal(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        GenMocksError::Config(msg.into())
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        GenMocksError::Render(msg.into())
    }
}

/// Result type alias for gen-mocks operations
pub type Result<T> = std::result::Result<T, GenMocksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_resolution_message_names_qualifier() {
        let err = GenMocksError::ImportResolution {
            path: PathBuf::from("svc/user_mock.go"),
            qualifier: "models".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "svc/user_mock.go: could not resolve import for package \"models\""
        );
    }

    #[test]
    fn test_invalid_regex_converts() {
        let err: GenMocksError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, GenMocksError::Pattern(_)));
    }
}
