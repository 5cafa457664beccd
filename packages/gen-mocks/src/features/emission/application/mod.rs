//! Emission application layer

mod emit;
mod fixup;
mod printer;

pub use emit::Emitter;
pub use fixup::separate_funcs;
pub use printer::{is_identifier, GoPrinter};
