//! Parser port (interface)
//!
//! Defines the contract for parsing source code.

use std::path::Path;

use crate::features::parsing::domain::SourceFile;
use crate::shared::models::{FileSet, Result};

/// Parser trait - abstraction over parsing implementation
pub trait Parser: Send + Sync {
    /// Parse one source file, registering it in `fset`
    ///
    /// Syntax errors are collected across the whole file and reported together
    /// as a single parse error.
    fn parse(&self, source: &str, path: &Path, fset: &mut FileSet) -> Result<SourceFile>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
