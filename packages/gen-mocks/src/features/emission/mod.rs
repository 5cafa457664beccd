//! Emission Feature
//!
//! Renders the mocks of one source file into a gofmt-formatted Go file and
//! normalizes its imports.
//!
//! ## Structure
//! - `domain/` - OutputFile
//! - `application/` - GoPrinter, the cosmetic fixup pass, Emitter
//! - `ports/` - ImportProcessor
//! - `infrastructure/` - NativeImportResolver, GoimportsCommand

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{Emitter, GoPrinter};
pub use domain::OutputFile;
pub use infrastructure::{GoimportsCommand, NativeImportResolver};
pub use ports::ImportProcessor;
