//! Output sink adapters

mod file_sink;
mod preview_sink;

pub use file_sink::FileSink;
pub use preview_sink::PreviewSink;
