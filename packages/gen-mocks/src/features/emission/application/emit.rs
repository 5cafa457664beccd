//! Emit use case
//!
//! print -> separate funcs -> normalize imports

use std::path::Path;

use tracing::debug;

use super::fixup::separate_funcs;
use super::printer::GoPrinter;
use crate::features::emission::domain::OutputFile;
use crate::features::emission::ports::ImportProcessor;
use crate::shared::models::Result;

/// Emitter
#[derive(Debug, Default, Clone, Copy)]
pub struct Emitter;

impl Emitter {
    pub fn new() -> Self {
        Self
    }

    /// Final bytes of `file`, destined for `path_hint`
    pub fn emit(
        &self,
        file: &OutputFile,
        path_hint: &Path,
        imports: &dyn ImportProcessor,
    ) -> Result<Vec<u8>> {
        let printed = GoPrinter::print(file)?;
        let src = separate_funcs(&printed);
        debug!(
            "{}: {} mocks printed, normalizing imports with {}",
            path_hint.display(),
            file.mocks.len(),
            imports.name()
        );
        let src = imports.process(path_hint, &src)?;
        Ok(src.into_bytes())
    }
}
