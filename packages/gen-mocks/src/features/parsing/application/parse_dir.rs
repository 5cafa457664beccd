//! Parse directory use case
//!
//! Reads every Go file directly inside a directory and groups the files by
//! package clause.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::features::parsing::domain::ParsedPackage;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{FileSet, GenMocksError, Result};

/// Parse directory use case
pub struct ParseDirUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseDirUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Source files of `dir` the parser supports, sorted by file name
    pub fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(io) => GenMocksError::Io(io),
                None => GenMocksError::config(format!("cannot read {}", dir.display())),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let supported = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.parser.supports_extension(ext));
            if supported {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Parse every source file of `dir`; packages are keyed (and ordered) by name
    ///
    /// The first file that fails to parse aborts the whole directory.
    pub fn execute(&self, dir: &Path, fset: &mut FileSet) -> Result<BTreeMap<String, ParsedPackage>> {
        if !dir.is_dir() {
            return Err(GenMocksError::config(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let mut packages: BTreeMap<String, ParsedPackage> = BTreeMap::new();
        for path in self.source_files(dir)? {
            let source = fs::read_to_string(&path)?;
            let file = self.parser.parse(&source, &path, fset)?;
            debug!(
                "parsed {} {} (package {}, {} declarations)",
                self.parser.language_name(),
                path.display(),
                file.package,
                file.decls.len()
            );
            packages
                .entry(file.package.clone())
                .or_insert_with(|| ParsedPackage::new(file.package.clone(), dir))
                .files
                .push(file);
        }
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::TreeSitterGoParser;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_groups_files_by_package() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.go", "package svc\n\ntype B int\n");
        write(tmp.path(), "a.go", "package svc\n\ntype A int\n");
        write(tmp.path(), "a_test.go", "package svc_test\n");
        write(tmp.path(), "README.md", "not go");
        fs::create_dir(tmp.path().join("nested")).unwrap();
        write(&tmp.path().join("nested"), "c.go", "package nested\n");

        let use_case = ParseDirUseCase::new(TreeSitterGoParser::new());
        let mut fset = FileSet::new();
        let packages = use_case.execute(tmp.path(), &mut fset).unwrap();

        assert_eq!(
            packages.keys().collect::<Vec<_>>(),
            vec!["svc", "svc_test"]
        );
        let names: Vec<_> = packages["svc"]
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.go", "b.go"]);
        assert_eq!(fset.len(), 3);
    }

    #[test]
    fn test_parse_error_aborts() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "bad.go", "package svc\n\nfunc (\n");

        let use_case = ParseDirUseCase::new(TreeSitterGoParser::new());
        let result = use_case.execute(tmp.path(), &mut FileSet::new());
        assert!(matches!(result, Err(GenMocksError::Parse(_))));
    }

    #[test]
    fn test_missing_directory_is_config_error() {
        let use_case = ParseDirUseCase::new(TreeSitterGoParser::new());
        let result = use_case.execute(Path::new("/nonexistent/gen-mocks"), &mut FileSet::new());
        assert!(matches!(result, Err(GenMocksError::Config(_))));
    }
}
