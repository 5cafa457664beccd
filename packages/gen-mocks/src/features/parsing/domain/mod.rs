//! Parsing domain models

mod display;
mod go_ast;
mod package;
mod visitor;

pub use go_ast::{
    assumed_package_name, ChanDir, Decl, FieldGroup, FuncType, GoType, ImportSpec, InterfaceElem,
    SourceFile, StructField, TypeSpec,
};
pub use package::ParsedPackage;
pub use visitor::{walk_file, walk_package, Visitor};
