//! Built-in import normalization
//!
//! Re-parses the printed source, collects the package qualifiers used in
//! type positions and rebuilds the import block from them. A qualifier is
//! resolved from the imports already in the source, then from the imports of
//! the scanned package, then from the standard library table.

use std::collections::BTreeSet;
use std::ops::Range;
use std::path::Path;

use tracing::debug;
use tree_sitter::Node as TSNode;

use super::stdlib::{is_stdlib_path, stdlib_import_path};
use crate::features::emission::ports::ImportProcessor;
use crate::features::parsing::domain::{ImportSpec, ParsedPackage};
use crate::features::parsing::TreeSitterGoParser;
use crate::shared::models::{GenMocksError, Result};
use crate::shared::utils::tree_sitter::{
    extract_node_text, field_text, find_descendants_by_kind, named_children,
};

/// Import processor that needs no Go toolchain
#[derive(Debug, Default, Clone)]
pub struct NativeImportResolver {
    known: Vec<ImportSpec>,
    parser: TreeSitterGoParser,
}

impl NativeImportResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that knows every import of `package`
    pub fn for_package(package: &ParsedPackage) -> Self {
        Self {
            known: package.imports().into_iter().cloned().collect(),
            parser: TreeSitterGoParser::new(),
        }
    }

    /// Resolver for mocks of interfaces declared in `source`
    ///
    /// The imports of `source` shadow same-named imports of other files.
    pub fn for_source(package: &ParsedPackage, source: &Path) -> Self {
        Self {
            known: package.imports_for(source).into_iter().cloned().collect(),
            parser: TreeSitterGoParser::new(),
        }
    }

    pub fn with_import(mut self, spec: ImportSpec) -> Self {
        if !self.known.contains(&spec) {
            self.known.push(spec);
        }
        self
    }

    fn resolve(&self, path_hint: &Path, qualifier: &str, existing: &[ImportSpec]) -> Result<ImportSpec> {
        if let Some(spec) = existing
            .iter()
            .chain(&self.known)
            .find(|spec| spec.qualifier() == qualifier)
        {
            return Ok(spec.clone());
        }
        if let Some(path) = stdlib_import_path(qualifier) {
            debug!("resolved {} from the standard library", qualifier);
            return Ok(ImportSpec::new(path));
        }
        Err(GenMocksError::ImportResolution {
            path: path_hint.to_path_buf(),
            qualifier: qualifier.to_string(),
        })
    }
}

fn lower_import_specs(decl: &TSNode, src: &str) -> Vec<ImportSpec> {
    find_descendants_by_kind(decl, "import_spec")
        .iter()
        .filter_map(|spec| {
            let path = spec.child_by_field_name("path")?;
            let path = extract_node_text(&path, src).trim_matches(|c| c == '"' || c == '`');
            let import = ImportSpec::new(path);
            Some(match field_text(spec, "name", src) {
                Some(name) => import.with_name(name),
                None => import,
            })
        })
        .collect()
}

fn used_qualifiers(root: &TSNode, src: &str) -> BTreeSet<String> {
    find_descendants_by_kind(root, "qualified_type")
        .iter()
        .filter_map(|node| field_text(node, "package", src))
        .collect()
}

/// Import declaration for `specs`, grouped and sorted the way goimports does
pub fn render_import_block(specs: &BTreeSet<ImportSpec>) -> Option<String> {
    let (mut std, mut other): (Vec<&ImportSpec>, Vec<&ImportSpec>) =
        specs.iter().partition(|spec| is_stdlib_path(&spec.path));
    let by_path = |a: &&ImportSpec, b: &&ImportSpec| a.path.cmp(&b.path).then(a.name.cmp(&b.name));
    std.sort_by(by_path);
    other.sort_by(by_path);

    match specs.len() {
        0 => None,
        1 => specs.iter().next().map(|spec| format!("import {}\n", spec)),
        _ => {
            let mut block = String::from("import (\n");
            for spec in &std {
                block.push_str(&format!("\t{}\n", spec));
            }
            if !std.is_empty() && !other.is_empty() {
                block.push('\n');
            }
            for spec in &other {
                block.push_str(&format!("\t{}\n", spec));
            }
            block.push_str(")\n");
            Some(block)
        }
    }
}

impl ImportProcessor for NativeImportResolver {
    fn process(&self, path_hint: &Path, src: &str) -> Result<String> {
        let tree = self.parser.parse_tree(src, path_hint)?;
        let root = tree.root_node();

        let mut package_end = None;
        let mut existing = Vec::new();
        let mut import_ranges: Vec<Range<usize>> = Vec::new();
        for child in named_children(&root) {
            match child.kind() {
                "package_clause" => package_end = Some(child.end_byte()),
                "import_declaration" => {
                    existing.extend(lower_import_specs(&child, src));
                    import_ranges.push(child.byte_range());
                }
                _ => {}
            }
        }
        let package_end = package_end.ok_or_else(|| GenMocksError::ImportProcess {
            path: path_hint.to_path_buf(),
            message: "expected 'package' clause".to_string(),
        })?;

        let mut specs = BTreeSet::new();
        for qualifier in used_qualifiers(&root, src) {
            specs.insert(self.resolve(path_hint, &qualifier, &existing)?);
        }
        for spec in &existing {
            if matches!(spec.name.as_deref(), Some("_") | Some(".")) {
                specs.insert(spec.clone());
            }
        }
        debug!(
            "{}: {} imports kept of {} seeded",
            path_hint.display(),
            specs.len(),
            existing.len()
        );

        let mut rest = String::with_capacity(src.len());
        let mut cursor = package_end;
        for range in import_ranges {
            rest.push_str(&src[cursor..range.start]);
            cursor = range.end;
        }
        rest.push_str(&src[cursor..]);
        let rest = rest.trim_start();

        let mut out = String::with_capacity(src.len());
        out.push_str(&src[..package_end]);
        out.push('\n');
        if let Some(block) = render_import_block(&specs) {
            out.push('\n');
            out.push_str(&block);
        }
        if !rest.is_empty() {
            out.push('\n');
            out.push_str(rest);
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BODY: &str = "type MockUserService struct {\n\tGet_ func(ctx context.Context, id string) (*pb.User, error)\n}\n\nfunc (s *MockUserService) Get(ctx context.Context, id string) (*pb.User, error) {\n\treturn s.Get_(ctx, id)\n}\n";

    fn process(resolver: &NativeImportResolver, src: &str) -> Result<String> {
        resolver.process(Path::new("svc/user_mock.go"), src)
    }

    #[test]
    fn test_adds_missing_imports_grouped() {
        let resolver = NativeImportResolver::new()
            .with_import(ImportSpec::new("github.com/acme/proto").with_name("pb"));
        let out = process(&resolver, &format!("package svc\n\n{}", BODY)).unwrap();
        assert_eq!(
            out,
            format!(
                "package svc\n\nimport (\n\t\"context\"\n\n\tpb \"github.com/acme/proto\"\n)\n\n{}",
                BODY
            )
        );
    }

    #[test]
    fn test_drops_unused_and_keeps_blank_imports() {
        let src = "package svc\n\nimport (\n\t\"github.com/acme/svc\"\n\t_ \"embed\"\n\t\"time\"\n)\n\ntype MockClockService struct {\n\tNow_ func() time.Time\n}\n";
        let out = process(&NativeImportResolver::new(), src).unwrap();
        assert_eq!(
            out,
            "package svc\n\nimport (\n\t_ \"embed\"\n\t\"time\"\n)\n\ntype MockClockService struct {\n\tNow_ func() time.Time\n}\n"
        );
    }

    #[test]
    fn test_single_import_and_no_imports() {
        let src = "package svc\n\nimport \"github.com/acme/svc\"\n\ntype MockPingService struct {\n\tPing_ func(ctx context.Context) error\n}\n";
        let out = process(&NativeImportResolver::new(), src).unwrap();
        assert!(out.starts_with("package svc\n\nimport \"context\"\n\ntype MockPingService"));

        let src = "package svc\n\nimport \"github.com/acme/svc\"\n\ntype MockNopService struct {\n}\n";
        let out = process(&NativeImportResolver::new(), src).unwrap();
        assert_eq!(out, "package svc\n\ntype MockNopService struct {\n}\n");
    }

    #[test]
    fn test_seeded_import_wins_over_stdlib() {
        let src = "package svc\n\nimport \"github.com/acme/errors\"\n\ntype MockErrService struct {\n\tWrap_ func(err errors.Code) error\n}\n";
        let out = process(&NativeImportResolver::new(), src).unwrap();
        assert!(out.contains("import \"github.com/acme/errors\"\n"));
    }

    #[test]
    fn test_unknown_qualifier_is_an_error() {
        let src = "package svc\n\ntype MockAService struct {\n\tGet_ func() widget.Part\n}\n";
        let err = process(&NativeImportResolver::new(), src).unwrap_err();
        match err {
            GenMocksError::ImportResolution { path, qualifier } => {
                assert_eq!(qualifier, "widget");
                assert_eq!(path, Path::new("svc/user_mock.go"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_idempotent() {
        let resolver = NativeImportResolver::new()
            .with_import(ImportSpec::new("github.com/acme/proto").with_name("pb"));
        let once = process(&resolver, &format!("package svc\n\n{}", BODY)).unwrap();
        let twice = process(&resolver, &once).unwrap();
        assert_eq!(once, twice);
    }
}
