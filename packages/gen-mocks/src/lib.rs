/*
 * gen-mocks - Go interface mock generator
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, FileSet), constants, tree-sitter helpers
 * - features/    : Vertical slices (parsing → interface_selection → mock_synthesis → emission → output)
 * - config/      : Typed, validated run configuration and import path resolution
 * - pipeline/    : Orchestration of one generation pass
 */

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, PackageLocation};
pub use errors::{GenMocksError, Result};
pub use features::output::{FileSink, OutputSink, PreviewSink};
pub use pipeline::{MockGenerator, RunReport};
