//! Generator configuration
//!
//! Raw command line values go through [`GeneratorConfigBuilder`], which
//! applies the defaults of the chosen invocation shape and validates the
//! result before any file is read.
//!
//! # Examples
//!
//! ```rust,ignore
//! use gen_mocks::config::GeneratorConfig;
//!
//! // Directory shape: every package in ./internal/svc, mocks next to the sources
//! let config = GeneratorConfig::builder("./internal/svc").build()?;
//!
//! // Import-path shape: package `svc` of a module dependency, written to ./svc
//! let config = GeneratorConfig::builder("github.com/acme/app/svc")
//!     .pattern("Store$")
//!     .write(true)
//!     .build()?;
//! ```

pub mod generator_config;
pub mod import_path;
pub mod validation;

pub use generator_config::{GeneratorConfig, GeneratorConfigBuilder, PackageLocation};
pub use import_path::ImportPathResolver;
pub use validation::Validatable;
