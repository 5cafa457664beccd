//! Feature modules - each feature follows Hexagonal Architecture
//!
//! Each feature contains some of:
//! - domain/     - Pure models (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations
//!
//! Data flows parsing → interface_selection → mock_synthesis → emission → output.

pub mod emission;
pub mod interface_selection;
pub mod mock_synthesis;
pub mod output;
pub mod parsing;
