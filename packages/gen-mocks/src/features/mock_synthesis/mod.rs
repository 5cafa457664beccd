//! Mock Synthesis Feature
//!
//! Turns one selected interface into the declarations of its mock: a struct
//! with one function field per method and one delegating method per field.
//!
//! ## Structure
//! - `domain/` - MockDeclarationSet, FieldSpec, DelegatingMethod
//! - `application/` - MockSynthesizer

pub mod application;
pub mod domain;

pub use application::MockSynthesizer;
pub use domain::{CallArg, DelegatingMethod, FieldSpec, MockDeclarationSet};
