//! Writes generated files to disk

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::features::output::ports::OutputSink;
use crate::shared::models::Result;

/// Sink used with `-w`: creates parent directories and overwrites files
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl FileSink {
    pub fn new() -> Self {
        Self
    }

    fn create_dir(dir: &Path) -> Result<()> {
        if dir.as_os_str().is_empty() || dir.is_dir() {
            return Ok(());
        }
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(crate::shared::constants::output::DIR_MODE);
        }
        builder.create(dir)?;
        debug!("created {}", dir.display());
        Ok(())
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(dir) = path.parent() {
            Self::create_dir(dir)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }
}
