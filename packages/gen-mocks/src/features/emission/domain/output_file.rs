//! In-memory output file

use crate::features::mock_synthesis::MockDeclarationSet;
use crate::features::parsing::domain::ImportSpec;

/// One generated Go file before printing
#[derive(Debug, Clone)]
pub struct OutputFile {
    /// Package clause of the generated file
    pub package: String,

    /// Seed imports; normalization adds the missing ones and drops the unused
    pub imports: Vec<ImportSpec>,

    /// Mocks in declaration order
    pub mocks: Vec<MockDeclarationSet>,
}

impl OutputFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
            mocks: Vec::new(),
        }
    }

    pub fn with_import(mut self, spec: ImportSpec) -> Self {
        if !self.imports.contains(&spec) {
            self.imports.push(spec);
        }
        self
    }

    pub fn push(&mut self, mock: MockDeclarationSet) {
        self.mocks.push(mock);
    }

    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }
}
