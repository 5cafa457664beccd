//! Synthesized mock declarations

use std::path::PathBuf;

use crate::features::parsing::domain::FuncType;

/// Everything generated for one interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDeclarationSet {
    /// Name of the mocked interface
    pub interface: String,

    /// File declaring the interface
    pub source_path: PathBuf,

    /// `Mock` + interface name
    pub mock_name: String,

    /// One function field per method, in method order
    pub fields: Vec<FieldSpec>,

    /// One delegating method per field, in method order
    pub methods: Vec<DelegatingMethod>,
}

/// Function-valued struct field backing one method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: FuncType,
}

/// Pointer-receiver method forwarding to its field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatingMethod {
    pub receiver: String,

    /// Mock type name; the receiver is `*receiver_type`
    pub receiver_type: String,

    pub name: String,

    /// Same signature as the interface method, every parameter named
    pub signature: FuncType,

    /// Field invoked by the body
    pub field: String,

    /// Arguments of the field call, in parameter order
    pub args: Vec<CallArg>,
}

impl DelegatingMethod {
    /// `s.Get_(id, opts...)`
    pub fn call_expr(&self) -> String {
        let args = self
            .args
            .iter()
            .map(|arg| {
                if arg.spread {
                    format!("{}...", arg.name)
                } else {
                    arg.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}.{}({})", self.receiver, self.field, args)
    }

    /// The single body statement; methods without results cannot `return` a call
    pub fn body_stmt(&self) -> String {
        if self.signature.has_results() {
            format!("return {}", self.call_expr())
        } else {
            self.call_expr()
        }
    }
}

/// Forwarded parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArg {
    pub name: String,

    /// Variadic parameter, forwarded as `name...`
    pub spread: bool,
}
