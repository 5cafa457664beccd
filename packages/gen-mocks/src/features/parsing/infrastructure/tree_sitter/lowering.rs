//! Concrete syntax tree → Go syntax model
//!
//! Only top-level declarations are lowered; function bodies are skipped.
//! Node kinds cover both the current `tree-sitter-go` grammar (`method_elem`,
//! `type_elem`) and the older one (`method_spec`, `method_spec_list`).

use std::path::Path;

use tree_sitter::{Node as TSNode, Parser as TSParser};

use crate::features::parsing::domain::{
    ChanDir, Decl, FieldGroup, FuncType, GoType, ImportSpec, InterfaceElem, SourceFile,
    StructField, TypeSpec,
};
use crate::shared::models::{FileId, GenMocksError, Result};
use crate::shared::utils::tree_sitter::{
    collapse_whitespace, collect_error_spans, extract_node_text, extract_node_text_owned,
    field_text, find_descendants_by_kind, named_children, node_to_span,
};

/// Keywords that open a type expression
const TYPE_KEYWORDS: &[&str] = &["map", "chan", "func", "interface", "struct"];

/// Split `text` on commas outside brackets, braces, parentheses and literals
fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            match c {
                '\\' if q == '"' && !escaped => escaped = true,
                _ if c == q && !escaped => quote = None,
                _ => escaped = false,
            }
            continue;
        }
        match c {
            '"' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(text[start..].trim());
    pieces.retain(|p| !p.is_empty());
    pieces
}

/// Lower a standalone type expression such as `map[string]int`
fn lower_type_text(ty: &str) -> Result<GoType> {
    let snippet = format!("package p\n\ntype _ {}\n", ty);
    let mut parser = TSParser::new();
    parser
        .set_language(&tree_sitter_go::language())
        .map_err(|e| GenMocksError::parse_error(format!("Failed to set language: {}", e)))?;
    let tree = parser
        .parse(&snippet, None)
        .ok_or_else(|| GenMocksError::internal(format!("failed to parse type {}", ty)))?;

    let root = tree.root_node();
    let mut errors = Vec::new();
    collect_error_spans(&root, &mut errors);
    if !errors.is_empty() {
        return Err(GenMocksError::internal(format!("invalid parameter type {}", ty)));
    }

    let lowering = Lowering::new(&snippet);
    let spec = find_descendants_by_kind(&root, "type_spec")
        .into_iter()
        .next()
        .ok_or_else(|| GenMocksError::internal(format!("failed to parse type {}", ty)))?;
    lowering.lower_type(&lowering.required(&spec, "type")?)
}

pub(super) struct Lowering<'s> {
    source: &'s str,
}

impl<'s> Lowering<'s> {
    pub(super) fn new(source: &'s str) -> Self {
        Self { source }
    }

    fn text(&self, node: &TSNode) -> String {
        extract_node_text_owned(node, self.source)
    }

    fn required<'t>(&self, node: &TSNode<'t>, field: &str) -> Result<TSNode<'t>> {
        node.child_by_field_name(field).ok_or_else(|| {
            GenMocksError::internal(format!(
                "{} at line {} has no {} field",
                node.kind(),
                node.start_position().row + 1,
                field
            ))
        })
    }

    pub(super) fn lower_file(&self, root: &TSNode, file: FileId, path: &Path) -> Result<SourceFile> {
        let mut package = None;
        let mut imports = Vec::new();
        let mut decls = Vec::new();

        for child in named_children(root) {
            match child.kind() {
                "package_clause" => {
                    package = named_children(&child).first().map(|n| self.text(n));
                }
                "import_declaration" => self.lower_imports(&child, &mut imports),
                "type_declaration" => self.lower_type_declaration(&child, &mut decls)?,
                "function_declaration" | "method_declaration" => {
                    decls.push(Decl::Func(node_to_span(&child)))
                }
                _ => decls.push(Decl::Other(node_to_span(&child))),
            }
        }

        let package = package.ok_or_else(|| {
            GenMocksError::parse_error(format!("{}: expected 'package' clause", path.display()))
        })?;

        Ok(SourceFile {
            file,
            path: path.to_path_buf(),
            package,
            imports,
            decls,
        })
    }

    fn lower_imports(&self, node: &TSNode, imports: &mut Vec<ImportSpec>) {
        for child in named_children(node) {
            match child.kind() {
                "import_spec" => imports.extend(self.lower_import_spec(&child)),
                "import_spec_list" => self.lower_imports(&child, imports),
                _ => {}
            }
        }
    }

    fn lower_import_spec(&self, node: &TSNode) -> Option<ImportSpec> {
        let path = node.child_by_field_name("path")?;
        let path = extract_node_text(&path, self.source).trim_matches(|c| c == '"' || c == '`');
        let mut spec = ImportSpec::new(path);
        if let Some(name) = field_text(node, "name", self.source) {
            spec = spec.with_name(name);
        }
        Some(spec)
    }

    fn lower_type_declaration(&self, node: &TSNode, decls: &mut Vec<Decl>) -> Result<()> {
        for child in named_children(node) {
            match child.kind() {
                "type_spec" => {
                    let name = self.text(&self.required(&child, "name")?);
                    let ty = self.lower_type(&self.required(&child, "type")?)?;
                    decls.push(Decl::Type(TypeSpec {
                        name,
                        generic: child.child_by_field_name("type_parameters").is_some(),
                        ty,
                        span: node_to_span(&child),
                    }));
                }
                "type_alias" => decls.push(Decl::Alias {
                    name: field_text(&child, "name", self.source).unwrap_or_default(),
                    span: node_to_span(&child),
                }),
                _ => {}
            }
        }
        Ok(())
    }

    fn lower_type(&self, node: &TSNode) -> Result<GoType> {
        let ty = match node.kind() {
            "type_identifier" | "identifier" | "field_identifier" => GoType::Named(self.text(node)),
            "qualified_type" => GoType::Qualified {
                package: self.text(&self.required(node, "package")?),
                name: self.text(&self.required(node, "name")?),
            },
            "generic_type" => {
                let base = self.lower_type(&self.required(node, "type")?)?;
                let args = match node.child_by_field_name("type_arguments") {
                    Some(list) => named_children(&list)
                        .iter()
                        .map(|arg| self.lower_type(arg))
                        .collect::<Result<Vec<_>>>()?,
                    None => Vec::new(),
                };
                GoType::Generic {
                    base: Box::new(base),
                    args,
                }
            }
            "pointer_type" => GoType::Pointer(Box::new(self.lower_only_child(node)?)),
            "slice_type" => {
                GoType::Slice(Box::new(self.lower_type(&self.required(node, "element")?)?))
            }
            "array_type" => GoType::Array {
                len: collapse_whitespace(extract_node_text(
                    &self.required(node, "length")?,
                    self.source,
                )),
                elem: Box::new(self.lower_type(&self.required(node, "element")?)?),
            },
            "implicit_length_array_type" => GoType::Array {
                len: "...".to_string(),
                elem: Box::new(self.lower_type(&self.required(node, "element")?)?),
            },
            "map_type" => GoType::Map {
                key: Box::new(self.lower_type(&self.required(node, "key")?)?),
                value: Box::new(self.lower_type(&self.required(node, "value")?)?),
            },
            "channel_type" => GoType::Chan {
                dir: self.chan_dir(node),
                elem: Box::new(self.lower_type(&self.required(node, "value")?)?),
            },
            "function_type" => GoType::Func(self.lower_signature(node)?),
            "interface_type" => GoType::Interface(self.lower_interface_body(node)?),
            "struct_type" => GoType::Struct(self.lower_struct_body(node)?),
            "parenthesized_type" => GoType::Paren(Box::new(self.lower_only_child(node)?)),
            "type_elem" | "constraint_elem" | "interface_type_name" => {
                let terms = named_children(node);
                if terms.len() == 1 {
                    self.lower_type(&terms[0])?
                } else {
                    GoType::Raw(collapse_whitespace(extract_node_text(node, self.source)))
                }
            }
            _ => GoType::Raw(collapse_whitespace(extract_node_text(node, self.source))),
        };
        Ok(ty)
    }

    fn lower_only_child(&self, node: &TSNode) -> Result<GoType> {
        let children = named_children(node);
        let inner = children.first().ok_or_else(|| {
            GenMocksError::internal(format!(
                "empty {} at line {}",
                node.kind(),
                node.start_position().row + 1
            ))
        })?;
        self.lower_type(inner)
    }

    fn chan_dir(&self, node: &TSNode) -> ChanDir {
        let mut cursor = node.walk();
        let tokens: Vec<&str> = node
            .children(&mut cursor)
            .filter(|c| !c.is_named())
            .map(|c| c.kind())
            .collect();
        match tokens.as_slice() {
            ["<-", "chan", ..] => ChanDir::Recv,
            ["chan", "<-", ..] => ChanDir::Send,
            _ => ChanDir::Both,
        }
    }

    /// Parameters and results of a `function_type`, `method_elem` or `method_spec`
    fn lower_signature(&self, node: &TSNode) -> Result<FuncType> {
        let params = self.lower_parameter_list(&self.required(node, "parameters")?)?;
        let results = match node.child_by_field_name("result") {
            None => Vec::new(),
            Some(result) if result.kind() == "parameter_list" => {
                self.lower_parameter_list(&result)?
            }
            Some(result) => vec![FieldGroup::anonymous(self.lower_type(&result)?)],
        };
        Ok(FuncType { params, results })
    }

    fn lower_parameter_list(&self, node: &TSNode) -> Result<Vec<FieldGroup>> {
        if self.has_keyword_names(node) {
            return self.lower_anonymous_list(node);
        }
        let mut groups = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "parameter_declaration" => {
                    let mut cursor = child.walk();
                    let names = child
                        .children_by_field_name("name", &mut cursor)
                        .map(|n| self.text(&n))
                        .collect();
                    groups.push(FieldGroup {
                        names,
                        ty: self.lower_type(&self.required(&child, "type")?)?,
                        variadic: false,
                    });
                }
                "variadic_parameter_declaration" => {
                    groups.push(FieldGroup {
                        names: field_text(&child, "name", self.source).into_iter().collect(),
                        ty: self.lower_type(&self.required(&child, "type")?)?,
                        variadic: true,
                    });
                }
                _ => {}
            }
        }
        Ok(groups)
    }

    /// The grammar reads `(string, map[string]int)` as one group named
    /// `string, map`; a keyword can never be a parameter name.
    fn has_keyword_names(&self, list: &TSNode) -> bool {
        named_children(list)
            .iter()
            .filter(|c| c.kind() == "parameter_declaration")
            .any(|decl| {
                let mut cursor = decl.walk();
                let found = decl
                    .children_by_field_name("name", &mut cursor)
                    .any(|n| TYPE_KEYWORDS.contains(&extract_node_text(&n, self.source)));
                found
            })
    }

    /// Lower every top-level element of `list` as an unnamed type
    fn lower_anonymous_list(&self, list: &TSNode) -> Result<Vec<FieldGroup>> {
        let text = extract_node_text(list, self.source);
        let inner = text
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(text);

        split_top_level(inner)
            .into_iter()
            .map(|piece| match piece.strip_prefix("...") {
                Some(elem) => Ok(FieldGroup::anonymous(lower_type_text(elem.trim())?).variadic()),
                None => Ok(FieldGroup::anonymous(lower_type_text(piece)?)),
            })
            .collect()
    }

    fn lower_interface_body(&self, node: &TSNode) -> Result<Vec<InterfaceElem>> {
        let mut elems = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "method_spec_list" => elems.extend(self.lower_interface_body(&child)?),
                "method_elem" | "method_spec" => {
                    let name = self.text(&self.required(&child, "name")?);
                    if child.child_by_field_name("parameters").is_none() {
                        return Err(GenMocksError::internal(format!(
                            "interface method {} at line {} is not a function type",
                            name,
                            child.start_position().row + 1
                        )));
                    }
                    elems.push(InterfaceElem::Method {
                        name,
                        sig: self.lower_signature(&child)?,
                        span: node_to_span(&child),
                    });
                }
                _ => elems.push(InterfaceElem::Embedded {
                    ty: self.lower_type(&child)?,
                    span: node_to_span(&child),
                }),
            }
        }
        Ok(elems)
    }

    fn lower_struct_body(&self, node: &TSNode) -> Result<Vec<StructField>> {
        let mut fields = Vec::new();
        let Some(list) = named_children(node)
            .into_iter()
            .find(|c| c.kind() == "field_declaration_list")
        else {
            return Ok(fields);
        };

        for decl in named_children(&list) {
            if decl.kind() != "field_declaration" {
                continue;
            }
            let mut cursor = decl.walk();
            let names: Vec<String> = decl
                .children_by_field_name("name", &mut cursor)
                .map(|n| self.text(&n))
                .collect();
            let mut ty = self.lower_type(&self.required(&decl, "type")?)?;
            if names.is_empty() && self.has_token(&decl, "*") {
                ty = GoType::Pointer(Box::new(ty));
            }
            fields.push(StructField {
                names,
                ty,
                tag: field_text(&decl, "tag", self.source),
            });
        }
        Ok(fields)
    }

    fn has_token(&self, node: &TSNode, token: &str) -> bool {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .any(|c| !c.is_named() && c.kind() == token);
        found
    }
}
