//! Output sink port

use std::path::Path;

use crate::shared::models::Result;

/// Receives each generated file
pub trait OutputSink {
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()>;
}
