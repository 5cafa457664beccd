//! Import path → package directory
//!
//! Lookup order: the enclosing module (`go.mod` found by walking up from the
//! start directory), every `GOPATH` entry's `src/`, then `GOROOT/src`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::shared::models::{GenMocksError, Result};

/// Module path declared by a `go.mod` file
pub fn module_path(go_mod: &str) -> Option<String> {
    go_mod.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or("").trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let path = rest.trim().trim_matches(|c| c == '"' || c == '`');
        (!path.is_empty()).then(|| path.to_string())
    })
}

/// Resolves Go import paths to directories
#[derive(Debug, Clone, Default)]
pub struct ImportPathResolver {
    start_dir: PathBuf,
    gopath: Vec<PathBuf>,
    goroot: Option<PathBuf>,
}

impl ImportPathResolver {
    /// Resolver without GOPATH or GOROOT, searching modules above `start_dir`
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            ..Self::default()
        }
    }

    /// Resolver from the working directory and the `GOPATH`/`GOROOT` environment
    ///
    /// An unset `GOPATH` means `$HOME/go`, as for the go command.
    pub fn from_env() -> Result<Self> {
        let gopath = match env::var_os("GOPATH") {
            Some(value) if !value.is_empty() => env::split_paths(&value).collect(),
            _ => env::var_os("HOME")
                .map(|home| vec![PathBuf::from(home).join("go")])
                .unwrap_or_default(),
        };
        let goroot = env::var_os("GOROOT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            start_dir: env::current_dir()?,
            gopath,
            goroot,
        })
    }

    pub fn with_gopath(mut self, entries: impl IntoIterator<Item = PathBuf>) -> Self {
        self.gopath = entries.into_iter().collect();
        self
    }

    pub fn with_goroot(mut self, goroot: impl Into<PathBuf>) -> Self {
        self.goroot = Some(goroot.into());
        self
    }

    /// Nearest `go.mod` at or above the start directory, with its module path
    fn enclosing_module(&self) -> Option<(PathBuf, String)> {
        for dir in self.start_dir.ancestors() {
            let go_mod = dir.join("go.mod");
            if let Ok(contents) = fs::read_to_string(&go_mod) {
                return module_path(&contents).map(|module| (dir.to_path_buf(), module));
            }
        }
        None
    }

    fn candidates(&self, import_path: &str) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some((root, module)) = self.enclosing_module() {
            if import_path == module {
                dirs.push(root);
            } else if let Some(rest) = import_path
                .strip_prefix(module.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
            {
                dirs.push(root.join(rest));
            }
        }
        dirs.extend(self.gopath.iter().map(|entry| entry.join("src").join(import_path)));
        if let Some(goroot) = &self.goroot {
            dirs.push(goroot.join("src").join(import_path));
        }
        dirs
    }

    pub fn resolve(&self, import_path: &str) -> Result<PathBuf> {
        let found = self.candidates(import_path).into_iter().find(|dir| dir.is_dir());
        match found {
            Some(dir) => {
                debug!("{} resolved to {}", import_path, dir.display());
                Ok(dir)
            }
            None => Err(GenMocksError::config(format!(
                "cannot find package {:?} in the current module, GOPATH or GOROOT",
                import_path
            ))),
        }
    }

    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }
}
