//! Mock synthesis domain models

mod mock;

pub use mock::{CallArg, DelegatingMethod, FieldSpec, MockDeclarationSet};
