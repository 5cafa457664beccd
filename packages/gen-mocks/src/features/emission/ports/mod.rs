//! Emission ports

mod import_processor;

pub use import_processor::ImportProcessor;
