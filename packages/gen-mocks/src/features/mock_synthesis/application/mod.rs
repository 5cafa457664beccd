//! Mock synthesis application layer

mod synthesize;

pub use synthesize::MockSynthesizer;
