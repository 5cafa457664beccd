//! External goimports binary
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::features::emission::ports::ImportProcessor;
use crate::shared::models::{GenMocksError, Result};

/// Import processor delegating to a `goimports` executable
///
/// The source is piped through stdin; `-srcdir` points goimports at the
/// output file so it resolves imports from that location.
#[derive(Debug, Clone)]
pub struct GoimportsCommand {
    program: PathBuf,
}

impl GoimportsCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn failure(&self, path_hint: &Path, message: impl Into<String>) -> GenMocksError {
        GenMocksError::ImportProcess {
            path: path_hint.to_path_buf(),
            message: message.into(),
        }
    }
}

impl ImportProcessor for GoimportsCommand {
    fn process(&self, path_hint: &Path, src: &str) -> Result<String> {
        debug!("running {} -srcdir {}", self.program.display(), path_hint.display());
        let mut child = Command::new(&self.program)
            .arg("-srcdir")
            .arg(path_hint)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                self.failure(
                    path_hint,
                    format!("failed to run {}: {}", self.program.display(), e),
                )
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(src.as_bytes())?;
        }
        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(self.failure(
                path_hint,
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| self.failure(path_hint, format!("non UTF-8 output: {}", e)))
    }

    fn name(&self) -> &'static str {
        "goimports"
    }
}
