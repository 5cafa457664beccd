//! Interface selection domain models

mod interface;
mod matcher;

pub use interface::{InterfaceDeclaration, MethodSignature, Selection};
pub use matcher::NameMatcher;
