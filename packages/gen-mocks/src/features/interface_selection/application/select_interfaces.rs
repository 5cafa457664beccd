//! Select interfaces use case

use tracing::debug;

use crate::features::interface_selection::domain::{
    InterfaceDeclaration, MethodSignature, NameMatcher, Selection,
};
use crate::features::parsing::domain::{
    walk_package, GoType, InterfaceElem, ParsedPackage, SourceFile, TypeSpec, Visitor,
};

/// Collects matching interface type specs while walking a package
struct InterfaceCollector<'m> {
    matcher: &'m NameMatcher,
    found: Vec<InterfaceDeclaration>,
}

impl Visitor for InterfaceCollector<'_> {
    fn visit_type_spec(&mut self, file: &SourceFile, spec: &TypeSpec) {
        let GoType::Interface(elems) = &spec.ty else {
            return;
        };
        if !self.matcher.matches(&spec.name) {
            return;
        }
        if spec.generic {
            debug!("skipping generic interface {}", spec.name);
            return;
        }

        let mut methods = Vec::new();
        let mut embedded = Vec::new();
        for elem in elems {
            match elem {
                InterfaceElem::Method { name, sig, span } => methods.push(MethodSignature {
                    name: name.clone(),
                    func: sig.clone(),
                    span: *span,
                }),
                InterfaceElem::Embedded { ty, .. } => embedded.push(ty.clone()),
            }
        }

        self.found.push(InterfaceDeclaration {
            name: spec.name.clone(),
            file: file.file,
            source_path: file.path.clone(),
            span: spec.span,
            methods,
            embedded,
        });
    }
}

/// Select interfaces use case
pub struct SelectInterfacesUseCase {
    matcher: NameMatcher,
}

impl SelectInterfacesUseCase {
    pub fn new(matcher: NameMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &NameMatcher {
        &self.matcher
    }

    /// Matching top-level interfaces of `package`
    ///
    /// An empty selection is not an error; the caller decides how to report it.
    pub fn execute(&self, package: &ParsedPackage) -> Selection {
        let mut collector = InterfaceCollector {
            matcher: &self.matcher,
            found: Vec::new(),
        };
        walk_package(&mut collector, package);

        Selection {
            package: package.name.clone(),
            interfaces: collector.found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{Parser, TreeSitterGoParser};
    use crate::shared::models::FileSet;
    use std::path::Path;

    fn package(files: &[(&str, &str)]) -> ParsedPackage {
        let parser = TreeSitterGoParser::new();
        let mut fset = FileSet::new();
        let mut pkg = ParsedPackage::new("svc", ".");
        for (name, source) in files {
            pkg.files
                .push(parser.parse(source, Path::new(name), &mut fset).unwrap());
        }
        pkg
    }

    fn names(selection: &Selection) -> Vec<&str> {
        selection
            .interfaces
            .iter()
            .map(|i| i.name.as_str())
            .collect()
    }

    #[test]
    fn test_selects_suffix_matches_in_declaration_order() {
        let pkg = package(&[
            (
                "a.go",
                "package svc\n\ntype UserService interface { Get() }\n\ntype Store interface { Put() }\n\ntype AdminService interface { Ban() }\n",
            ),
            ("b.go", "package svc\n\ntype BillingService interface { Charge() }\n"),
        ]);
        let selection =
            SelectInterfacesUseCase::new(NameMatcher::suffix("Service")).execute(&pkg);
        assert_eq!(
            names(&selection),
            vec!["UserService", "AdminService", "BillingService"]
        );
        assert_eq!(selection.interfaces[2].source_path, Path::new("b.go"));
    }

    #[test]
    fn test_non_interfaces_and_aliases_are_ignored() {
        let pkg = package(&[(
            "a.go",
            "package svc\n\ntype FooService struct{}\n\ntype BarService = io.Reader\n\ntype BazService func()\n",
        )]);
        let selection =
            SelectInterfacesUseCase::new(NameMatcher::suffix("Service")).execute(&pkg);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_grouped_type_declaration() {
        let pkg = package(&[(
            "a.go",
            "package svc\n\ntype (\n\tAService interface { A() }\n\tBService interface { B() }\n)\n",
        )]);
        let selection = SelectInterfacesUseCase::new(NameMatcher::regex("Service$").unwrap())
            .execute(&pkg);
        assert_eq!(names(&selection), vec!["AService", "BService"]);
    }

    #[test]
    fn test_embedded_elements_are_separated() {
        let pkg = package(&[(
            "a.go",
            "package svc\n\ntype RWService interface {\n\tio.Reader\n\tClose() error\n}\n",
        )]);
        let selection =
            SelectInterfacesUseCase::new(NameMatcher::suffix("Service")).execute(&pkg);
        let iface = &selection.interfaces[0];
        assert_eq!(iface.methods.len(), 1);
        assert_eq!(iface.methods[0].name, "Close");
        assert_eq!(iface.embedded.len(), 1);
    }

    #[test]
    fn test_generic_interfaces_are_skipped() {
        let pkg = package(&[(
            "a.go",
            "package svc\n\ntype CacheService[K comparable] interface { Get(k K) }\n",
        )]);
        let selection =
            SelectInterfacesUseCase::new(NameMatcher::suffix("Service")).execute(&pkg);
        assert!(selection.is_empty());
    }
}
