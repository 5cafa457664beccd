//! Output Feature
//!
//! Where generated files go: their paths and the sinks that receive them.
//!
//! ## Structure
//! - `domain/` - output path naming
//! - `ports/` - OutputSink
//! - `infrastructure/` - FileSink, PreviewSink

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::output_path;
pub use infrastructure::{FileSink, PreviewSink};
pub use ports::OutputSink;
