//! Shared models

mod file_set;
mod span;

pub use crate::errors::{GenMocksError, Result};
pub use file_set::{FileId, FileSet, Position};
pub use span::Span;
