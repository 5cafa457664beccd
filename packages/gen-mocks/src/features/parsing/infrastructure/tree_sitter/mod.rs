//! Tree-sitter based parser implementation

mod lowering;
mod parser;

pub use parser::TreeSitterGoParser;
