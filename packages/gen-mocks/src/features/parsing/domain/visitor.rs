//! Declaration visitor
//!
//! Walks a package in declaration order within file order. Only top-level
//! declarations exist in the lowered model, so nothing nested is ever visited.

use super::go_ast::{Decl, SourceFile, TypeSpec};
use super::package::ParsedPackage;

pub trait Visitor {
    fn visit_file(&mut self, file: &SourceFile) {
        walk_file(self, file);
    }

    fn visit_decl(&mut self, file: &SourceFile, decl: &Decl) {
        if let Decl::Type(spec) = decl {
            self.visit_type_spec(file, spec);
        }
    }

    fn visit_type_spec(&mut self, _file: &SourceFile, _spec: &TypeSpec) {}
}

pub fn walk_package<V: Visitor + ?Sized>(visitor: &mut V, package: &ParsedPackage) {
    for file in &package.files {
        visitor.visit_file(file);
    }
}

pub fn walk_file<V: Visitor + ?Sized>(visitor: &mut V, file: &SourceFile) {
    for decl in &file.decls {
        visitor.visit_decl(file, decl);
    }
}
