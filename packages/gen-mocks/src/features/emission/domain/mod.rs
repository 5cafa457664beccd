//! Emission domain models

mod output_file;

pub use output_file::OutputFile;
