//! Configuration validation

use crate::shared::models::Result;

/// Configuration value that can check itself
pub trait Validatable {
    /// `Ok(())` if valid, a `Config` error describing the first problem otherwise
    fn validate(&self) -> Result<()>;
}
