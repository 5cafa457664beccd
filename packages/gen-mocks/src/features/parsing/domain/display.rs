//! Canonical text of Go type expressions
//!
//! Spacing follows gofmt: `func(a, b int) (string, error)`, `map[K]V`,
//! `<-chan T`, a single anonymous result without parentheses.

use std::fmt;

use super::go_ast::{
    ChanDir, FieldGroup, FuncType, GoType, ImportSpec, InterfaceElem, StructField,
};

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoType::Named(name) => f.write_str(name),
            GoType::Qualified { package, name } => write!(f, "{}.{}", package, name),
            GoType::Generic { base, args } => {
                write!(f, "{}[", base)?;
                join(f, args, ", ")?;
                f.write_str("]")
            }
            GoType::Pointer(elem) => write!(f, "*{}", elem),
            GoType::Slice(elem) => write!(f, "[]{}", elem),
            GoType::Array { len, elem } => write!(f, "[{}]{}", len, elem),
            GoType::Map { key, value } => write!(f, "map[{}]{}", key, value),
            GoType::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {}", elem),
                ChanDir::Send => write!(f, "chan<- {}", elem),
                ChanDir::Recv => write!(f, "<-chan {}", elem),
            },
            GoType::Func(sig) => write!(f, "func{}", sig),
            GoType::Interface(elems) if elems.is_empty() => f.write_str("interface{}"),
            GoType::Interface(elems) => {
                f.write_str("interface{ ")?;
                join(f, elems, "; ")?;
                f.write_str(" }")
            }
            GoType::Struct(fields) if fields.is_empty() => f.write_str("struct{}"),
            GoType::Struct(fields) => {
                f.write_str("struct{ ")?;
                join(f, fields, "; ")?;
                f.write_str(" }")
            }
            GoType::Paren(inner) => write!(f, "({})", inner),
            GoType::Raw(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        join(f, &self.params, ", ")?;
        f.write_str(")")?;
        match self.results.as_slice() {
            [] => Ok(()),
            [single] if single.is_anonymous() && !single.variadic => write!(f, " {}", single.ty),
            results => {
                f.write_str(" (")?;
                join(f, results, ", ")?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.names.is_empty() {
            write!(f, "{} ", self.names.join(", "))?;
        }
        if self.variadic {
            f.write_str("...")?;
        }
        write!(f, "{}", self.ty)
    }
}

impl fmt::Display for InterfaceElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceElem::Method { name, sig, .. } => write!(f, "{}{}", name, sig),
            InterfaceElem::Embedded { ty, .. } => write!(f, "{}", ty),
        }
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.names.is_empty() {
            write!(f, "{} ", self.names.join(", "))?;
        }
        write!(f, "{}", self.ty)?;
        if let Some(tag) = &self.tag {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}

/// Import spec line as it appears inside an import block: `name "path"`
impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{} ", name)?;
        }
        write!(f, "\"{}\"", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> GoType {
        GoType::Named(name.to_string())
    }

    #[test]
    fn test_signature_forms() {
        let sig = FuncType {
            params: vec![FieldGroup::named(["id"], named("string"))],
            results: vec![
                FieldGroup::anonymous(named("string")),
                FieldGroup::anonymous(named("error")),
            ],
        };
        assert_eq!(sig.to_string(), "(id string) (string, error)");

        let single = FuncType {
            params: vec![FieldGroup::anonymous(named("bool"))],
            results: vec![FieldGroup::anonymous(named("error"))],
        };
        assert_eq!(single.to_string(), "(bool) error");

        let named_result = FuncType {
            params: Vec::new(),
            results: vec![FieldGroup::named(["err"], named("error"))],
        };
        assert_eq!(named_result.to_string(), "() (err error)");
    }

    #[test]
    fn test_composite_types() {
        let variadic = FieldGroup::named(["opts"], named("Option")).variadic();
        assert_eq!(variadic.to_string(), "opts ...Option");

        let chan = GoType::Chan {
            dir: ChanDir::Send,
            elem: Box::new(GoType::Qualified {
                package: "time".into(),
                name: "Time".into(),
            }),
        };
        assert_eq!(chan.to_string(), "chan<- time.Time");

        let map = GoType::Map {
            key: Box::new(named("string")),
            value: Box::new(GoType::Slice(Box::new(GoType::Pointer(Box::new(named("User")))))),
        };
        assert_eq!(map.to_string(), "map[string][]*User");

        let func = GoType::Func(FuncType {
            params: vec![FieldGroup::anonymous(named("int"))],
            results: Vec::new(),
        });
        assert_eq!(func.to_string(), "func(int)");
        assert_eq!(GoType::Interface(Vec::new()).to_string(), "interface{}");
    }

    #[test]
    fn test_generic_instantiation() {
        let ty = GoType::Generic {
            base: Box::new(GoType::Qualified {
                package: "atomic".into(),
                name: "Pointer".into(),
            }),
            args: vec![named("Config")],
        };
        assert_eq!(ty.to_string(), "atomic.Pointer[Config]");
    }

    #[test]
    fn test_import_spec_line() {
        assert_eq!(ImportSpec::new("context").to_string(), "\"context\"");
        let aliased = ImportSpec::new("github.com/acme/proto").with_name("pb");
        assert_eq!(aliased.to_string(), "pb \"github.com/acme/proto\"");
    }
}
