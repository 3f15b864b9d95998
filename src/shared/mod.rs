//! Shared Module
//!
//! Types that do not depend on the HTTP layer: entity validation and the
//! shared error types.

/// Entity validation rules and failure formatting
pub mod validation;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use validation::{Validate, ValidationFailure, Violation};
