//! Parsing application layer

mod parse_dir;

pub use parse_dir::ParseDirUseCase;
