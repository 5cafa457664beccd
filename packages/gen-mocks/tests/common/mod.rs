//! Common test utilities for gen-mocks
//!
//! Fixtures write Go packages into temporary directories; assertions compare
//! generated files.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
