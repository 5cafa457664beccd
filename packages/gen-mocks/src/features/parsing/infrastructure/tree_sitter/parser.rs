//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use std::path::Path;

use tree_sitter::{Parser as TSParser, Tree};

use super::lowering::Lowering;
use crate::features::parsing::domain::SourceFile;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{FileSet, GenMocksError, Result};
use crate::shared::utils::tree_sitter::collect_error_spans;

/// Tree-sitter based Go parser
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSitterGoParser;

impl TreeSitterGoParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse into a raw tree-sitter tree, rejecting sources with syntax errors
    ///
    /// Every error in the file is collected first so the diagnostic can report
    /// how many there were, not just the first.
    pub fn parse_tree(&self, source: &str, path: &Path) -> Result<Tree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| GenMocksError::parse_error(format!("Failed to set language: {}", e)))?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            GenMocksError::parse_error(format!("{}: failed to parse source", path.display()))
        })?;

        let mut errors = Vec::new();
        collect_error_spans(&tree.root_node(), &mut errors);
        if let Some((span, message)) = errors.first() {
            let more = match errors.len() {
                1 => String::new(),
                n => format!(" (and {} more errors)", n - 1),
            };
            return Err(GenMocksError::parse_error(format!(
                "{}:{}:{}: {}{}",
                path.display(),
                span.start_line,
                span.start_col + 1,
                message,
                more
            )));
        }

        Ok(tree)
    }
}

impl Parser for TreeSitterGoParser {
    fn parse(&self, source: &str, path: &Path, fset: &mut FileSet) -> Result<SourceFile> {
        let tree = self.parse_tree(source, path)?;
        let file = fset.add_file(path);
        Lowering::new(source).lower_file(&tree.root_node(), file, path)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext == "go"
    }

    fn language_name(&self) -> &'static str {
        "go"
    }
}
