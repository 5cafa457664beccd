//! Interface Selection Feature
//!
//! Picks the top-level interface declarations of a package whose names match
//! the configured rule.
//!
//! ## Structure
//! - `domain/` - InterfaceDeclaration, MethodSignature, NameMatcher, Selection
//! - `application/` - SelectInterfacesUseCase (visitor based)

pub mod application;
pub mod domain;

pub use application::SelectInterfacesUseCase;
pub use domain::{InterfaceDeclaration, MethodSignature, NameMatcher, Selection};
