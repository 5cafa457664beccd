//! Output domain

mod path;

pub use path::output_path;
