//! Go syntax model
//!
//! A small tagged-variant AST covering what mock generation needs: top-level
//! declarations, imports and the full type grammar used in method signatures.
//! Values are immutable once lowered from the concrete syntax tree.

use std::path::PathBuf;

use crate::shared::models::{FileId, Span};

/// One parsed Go source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Handle in the pass-wide [`FileSet`](crate::shared::models::FileSet)
    pub file: FileId,

    /// Path the file was read from
    pub path: PathBuf,

    /// Name from the package clause
    pub package: String,

    /// Import specs in source order
    pub imports: Vec<ImportSpec>,

    /// Top-level declarations in source order
    pub decls: Vec<Decl>,
}

/// `import name "path"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportSpec {
    /// Explicit package name (`_`, `.` or an alias)
    pub name: Option<String>,

    /// Unquoted import path
    pub path: String,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Identifier the import binds in the importing file
    ///
    /// Without an explicit name this is the name the Go tooling assumes from the
    /// path: the last element, skipping a trailing major-version element
    /// (`v2`), without a `go-` prefix and cut at the first non-identifier rune.
    pub fn qualifier(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        assumed_package_name(&self.path)
    }
}

/// Package name the Go tooling assumes for an import path
pub fn assumed_package_name(import_path: &str) -> String {
    let mut elements = import_path.rsplit('/');
    let mut base = elements.next().unwrap_or(import_path);
    let is_major_version =
        base.len() > 1 && base.starts_with('v') && base[1..].chars().all(|c| c.is_ascii_digit());
    if is_major_version {
        if let Some(parent) = elements.next() {
            base = parent;
        }
    }
    let base = base.strip_prefix("go-").unwrap_or(base);
    let end = base
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(base.len());
    base[..end].to_string()
}

/// Top-level declaration
#[derive(Debug, Clone)]
pub enum Decl {
    /// `type Name[...] T`
    Type(TypeSpec),

    /// `type Name = T`
    Alias { name: String, span: Span },

    /// Function or method declaration (bodies are not lowered)
    Func(Span),

    /// `var`, `const` and anything else at top level
    Other(Span),
}

/// Defined type
#[derive(Debug, Clone)]
pub struct TypeSpec {
    pub name: String,

    /// Whether the declaration has type parameters
    pub generic: bool,

    pub ty: GoType,

    pub span: Span,
}

/// Channel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// Go type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    /// `T`, also predeclared types like `error`
    Named(String),

    /// `pkg.T`
    Qualified { package: String, name: String },

    /// `T[A, B]`
    Generic { base: Box<GoType>, args: Vec<GoType> },

    /// `*T`
    Pointer(Box<GoType>),

    /// `[]T`
    Slice(Box<GoType>),

    /// `[N]T`, `len` kept as normalized source text (`...` for implicit length)
    Array { len: String, elem: Box<GoType> },

    /// `map[K]V`
    Map { key: Box<GoType>, value: Box<GoType> },

    /// `chan T`, `chan<- T`, `<-chan T`
    Chan { dir: ChanDir, elem: Box<GoType> },

    /// `func(...) ...`
    Func(FuncType),

    /// `interface{ ... }`
    Interface(Vec<InterfaceElem>),

    /// `struct{ ... }`
    Struct(Vec<StructField>),

    /// `(T)`
    Paren(Box<GoType>),

    /// Anything else, as whitespace-normalized source text
    Raw(String),
}

/// Signature of a function type or method
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuncType {
    pub params: Vec<FieldGroup>,
    pub results: Vec<FieldGroup>,
}

impl FuncType {
    /// Total number of parameters after flattening groups
    pub fn param_count(&self) -> usize {
        self.params.iter().map(FieldGroup::arity).sum()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

/// One parameter or result declaration: `a, b int`, `...string` or just `bool`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    /// Declared names; empty when the declaration is anonymous
    pub names: Vec<String>,

    pub ty: GoType,

    /// `...T` (only valid on the last parameter)
    pub variadic: bool,
}

impl FieldGroup {
    pub fn anonymous(ty: GoType) -> Self {
        Self {
            names: Vec::new(),
            ty,
            variadic: false,
        }
    }

    pub fn named<S: Into<String>>(names: impl IntoIterator<Item = S>, ty: GoType) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty,
            variadic: false,
        }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn is_anonymous(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of parameters this group declares
    pub fn arity(&self) -> usize {
        self.names.len().max(1)
    }
}

/// Element of an interface body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceElem {
    Method {
        name: String,
        sig: FuncType,
        span: Span,
    },

    /// Embedded interface or type-set term
    Embedded { ty: GoType, span: Span },
}

/// Field of a struct type literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    /// Empty for embedded fields
    pub names: Vec<String>,
    pub ty: GoType,
    /// Raw tag literal, quotes included
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assumed_package_name() {
        assert_eq!(assumed_package_name("context"), "context");
        assert_eq!(assumed_package_name("net/http"), "http");
        assert_eq!(assumed_package_name("github.com/go-redis/redis/v8"), "redis");
        assert_eq!(assumed_package_name("github.com/mattn/go-sqlite3"), "sqlite3");
        assert_eq!(assumed_package_name("gopkg.in/yaml.v2"), "yaml");
    }

    #[test]
    fn test_explicit_name_wins() {
        let spec = ImportSpec::new("github.com/acme/api/v2").with_name("apiv2");
        assert_eq!(spec.qualifier(), "apiv2");
    }

    #[test]
    fn test_field_group_arity() {
        let group = FieldGroup::named(["a", "b"], GoType::Named("int".into()));
        assert_eq!(group.arity(), 2);
        assert_eq!(FieldGroup::anonymous(GoType::Named("bool".into())).arity(), 1);
    }
}
