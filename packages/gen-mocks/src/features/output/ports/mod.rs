//! Output ports

mod sink;

pub use sink::OutputSink;
