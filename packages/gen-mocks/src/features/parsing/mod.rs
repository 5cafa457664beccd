//! Parsing Feature
//!
//! Reads Go source files into the syntax model used by the rest of the pipeline.
//!
//! ## Structure
//! - `domain/` - Go syntax model, ParsedPackage, Visitor
//! - `ports/` - Parser trait
//! - `application/` - ParseDirUseCase
//! - `infrastructure/` - TreeSitterGoParser

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::ParseDirUseCase;
pub use domain::{ParsedPackage, SourceFile};
pub use infrastructure::TreeSitterGoParser;
pub use ports::Parser;
