//! Import normalization port

use std::path::Path;

use crate::shared::models::Result;

/// Rewrites the import block of a Go source so it compiles
///
/// Implementations add imports for every package qualifier the source uses,
/// drop unused ones and order the rest (standard library first, then others,
/// separated by a blank line).
pub trait ImportProcessor {
    /// `path_hint` is where the file will be written; it is used for
    /// diagnostics and by processors that resolve relative to a directory.
    fn process(&self, path_hint: &Path, src: &str) -> Result<String>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}
