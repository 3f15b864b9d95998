//! Shared Error Types
//!
//! Errors raised by the entity layer, independent of HTTP.
//!
//! # Error Categories
//!
//! - `ValidationFailed` - An entity broke one or more of its field rules
//! - `InvalidDisplayName` - A display name could not be split into given and
//!   family name
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

use crate::shared::validation::ValidationFailure;

/// Shared error types raised while building or checking entities
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Entity validation error
    #[error(transparent)]
    ValidationFailed(#[from] ValidationFailure),

    /// Display name without exactly one separating space
    #[error("Full name must have a space between the first and last name")]
    InvalidDisplayName {
        /// The rejected value
        value: String,
    },
}

impl SharedError {
    /// Create a new display name error
    pub fn invalid_display_name(value: impl Into<String>) -> Self {
        Self::InvalidDisplayName {
            value: value.into(),
        }
    }
}
