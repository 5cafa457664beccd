//! Deterministic Go printer
//!
//! Reproduces the gofmt layout for the small set of declarations mocks need:
//! tab indentation, struct field types aligned in one column, single-statement
//! bodies kept on the header line when they fit, and a blank line only between
//! declarations of different kinds.

use std::fmt::Write as _;

use crate::features::emission::domain::OutputFile;
use crate::features::mock_synthesis::{DelegatingMethod, MockDeclarationSet};
use crate::features::parsing::domain::{FieldGroup, ImportSpec};
use crate::shared::constants::layout::ONE_LINE_FUNC_MAX;
use crate::shared::models::{GenMocksError, Result};

const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Whether `name` is a valid, non-keyword Go identifier
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name)
}

fn check_identifier(name: &str, what: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(GenMocksError::render(format!(
            "invalid {} identifier {:?}",
            what, name
        )))
    }
}

fn check_groups(groups: &[FieldGroup], what: &str) -> Result<()> {
    groups
        .iter()
        .flat_map(|g| g.names.iter())
        .try_for_each(|name| check_identifier(name, what))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclKind {
    Type,
    Func,
}

/// Go printer
#[derive(Debug, Default)]
pub struct GoPrinter {
    out: String,
    last: Option<DeclKind>,
}

impl GoPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a whole output file
    pub fn print(file: &OutputFile) -> Result<String> {
        let mut printer = Self::new();
        printer.package_clause(&file.package)?;
        printer.imports(&file.imports)?;
        for mock in &file.mocks {
            printer.mock(mock)?;
        }
        Ok(printer.finish())
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn package_clause(&mut self, name: &str) -> Result<()> {
        check_identifier(name, "package")?;
        let _ = writeln!(self.out, "package {}", name);
        Ok(())
    }

    fn imports(&mut self, imports: &[ImportSpec]) -> Result<()> {
        for spec in imports {
            if let Some(name) = &spec.name {
                if name != "_" && name != "." {
                    check_identifier(name, "import name")?;
                }
            }
        }
        match imports {
            [] => {}
            [single] => {
                let _ = write!(self.out, "\nimport {}\n", single);
            }
            many => {
                self.out.push_str("\nimport (\n");
                for spec in many {
                    let _ = writeln!(self.out, "\t{}", spec);
                }
                self.out.push_str(")\n");
            }
        }
        Ok(())
    }

    fn separate(&mut self, kind: DeclKind) {
        match self.last {
            Some(prev) if prev == kind => {}
            _ => self.out.push('\n'),
        }
        self.last = Some(kind);
    }

    fn mock(&mut self, mock: &MockDeclarationSet) -> Result<()> {
        check_identifier(&mock.mock_name, "type")?;
        self.separate(DeclKind::Type);

        let _ = writeln!(self.out, "type {} struct {{", mock.mock_name);
        let width = mock
            .fields
            .iter()
            .map(|f| f.name.chars().count())
            .max()
            .unwrap_or(0);
        for field in &mock.fields {
            check_identifier(&field.name, "field")?;
            check_groups(&field.ty.params, "parameter")?;
            check_groups(&field.ty.results, "result")?;
            let _ = writeln!(
                self.out,
                "\t{:<width$} func{}",
                field.name,
                field.ty,
                width = width
            );
        }
        self.out.push_str("}\n");

        for method in &mock.methods {
            self.method(method)?;
        }
        Ok(())
    }

    fn method(&mut self, method: &DelegatingMethod) -> Result<()> {
        check_identifier(&method.receiver, "receiver")?;
        check_identifier(&method.name, "method")?;
        check_identifier(&method.field, "field")?;
        check_groups(&method.signature.params, "parameter")?;
        check_groups(&method.signature.results, "result")?;
        self.separate(DeclKind::Func);

        let header = method_header(method);
        let stmt = method.body_stmt();
        if header.chars().count() + stmt.chars().count() <= ONE_LINE_FUNC_MAX {
            let _ = writeln!(self.out, "{} {{ {} }}", header, stmt);
        } else {
            let _ = writeln!(self.out, "{} {{\n\t{}\n}}", header, stmt);
        }
        Ok(())
    }
}

fn method_header(method: &DelegatingMethod) -> String {
    format!(
        "func ({} *{}) {}{}",
        method.receiver, method.receiver_type, method.name, method.signature
    )
}
