//! Selected interface declarations

use std::path::PathBuf;

use crate::features::parsing::domain::{FuncType, GoType};
use crate::shared::models::{FileId, Span};

/// Interface chosen for mock generation
#[derive(Debug, Clone)]
pub struct InterfaceDeclaration {
    pub name: String,

    /// Handle of the declaring file in the pass-wide file set
    pub file: FileId,

    /// Path of the declaring file; names the output file
    pub source_path: PathBuf,

    pub span: Span,

    /// Methods in declaration order
    pub methods: Vec<MethodSignature>,

    /// Embedded interfaces and type-set terms, which are not mocked
    pub embedded: Vec<GoType>,
}

/// Method of an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub func: FuncType,
    pub span: Span,
}

/// Interfaces selected from one package
#[derive(Debug, Clone)]
pub struct Selection {
    /// Package clause name
    pub package: String,

    /// Matches in declaration order, grouped by file in file order
    pub interfaces: Vec<InterfaceDeclaration>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }
}
