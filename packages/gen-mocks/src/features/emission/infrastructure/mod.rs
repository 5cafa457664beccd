//! Import processor adapters

mod goimports;
mod native;
mod stdlib;

pub use goimports::GoimportsCommand;
pub use native::NativeImportResolver;
pub use stdlib::{is_stdlib_path, stdlib_import_path};
