//! Generator pipeline
//!
//! locate -> parse -> select -> synthesize -> emit -> sink, one package at a
//! time in package-name order.

mod generator;
mod report;

pub use generator::MockGenerator;
pub use report::RunReport;
