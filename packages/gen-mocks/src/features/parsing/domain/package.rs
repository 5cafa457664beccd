//! Parsed package representation

use std::path::{Path, PathBuf};

use super::go_ast::{ImportSpec, SourceFile};

/// All files of one package clause found in a directory
#[derive(Debug, Clone)]
pub struct ParsedPackage {
    /// Package clause name
    pub name: String,

    /// Directory the files were read from
    pub dir: PathBuf,

    /// Files in file-name order
    pub files: Vec<SourceFile>,
}

fn unique_imports<'a>(files: impl Iterator<Item = &'a SourceFile>) -> Vec<&'a ImportSpec> {
    let mut seen = Vec::new();
    for spec in files.flat_map(|f| f.imports.iter()) {
        if !seen.contains(&spec) {
            seen.push(spec);
        }
    }
    seen
}

impl ParsedPackage {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            files: Vec::new(),
        }
    }

    /// Import specs across all files, in file order, without duplicates
    pub fn imports(&self) -> Vec<&ImportSpec> {
        unique_imports(self.files.iter())
    }

    /// Import specs of the file at `source` first, then those of the others
    pub fn imports_for(&self, source: &Path) -> Vec<&ImportSpec> {
        let own = self.files.iter().filter(|f| f.path == source);
        let rest = self.files.iter().filter(|f| f.path != source);
        unique_imports(own.chain(rest))
    }

    pub fn is_test_package(&self) -> bool {
        self.name.ends_with("_test")
    }
}
