//! Position table for parsed files
//!
//! Every parsed file is registered once; afterwards the table is only read, to turn
//! a `(FileId, Span)` pair into a `path:line:col` string for diagnostics.

use std::fmt;
use std::path::{Path, PathBuf};

use super::Span;

/// Handle for a file registered in a [`FileSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

/// Resolved source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub path: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Columns are reported 1-indexed like the Go toolchain does
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column + 1)
    }
}

/// Registry of parsed files
#[derive(Debug, Default)]
pub struct FileSet {
    files: Vec<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and return its handle
    pub fn add_file(&mut self, path: impl Into<PathBuf>) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(path.into());
        id
    }

    /// Path of a registered file
    pub fn path(&self, id: FileId) -> Option<&Path> {
        self.files.get(id.0 as usize).map(PathBuf::as_path)
    }

    /// Position of the start of `span` in file `id`
    pub fn position(&self, id: FileId, span: &Span) -> Option<Position> {
        self.path(id).map(|path| Position {
            path: path.to_path_buf(),
            line: span.start_line,
            column: span.start_col,
        })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
