/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and extractors and can be
 * converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Gate Errors
 *
 * Raised before a handler runs:
 * - `BadType` - the request body did not match its declared field shapes
 * - `MissingSessionCookie` - the session cookie is absent or malformed
 *
 * ## Lookup Errors
 *
 * - `NotFound` - a referenced account or entry does not exist
 * - `Conflict` - a handle or email is already registered
 *
 * ## Business Rule Errors
 *
 * - `SharedError` - entity validation or display name failures
 * - `HandlerError` - route-specific rules such as empty required values
 *
 * ## Internal Errors
 *
 * - `Database` - the document store failed
 * - `StateError` - a background task or hashing step failed
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{SharedError, ValidationFailure};

/// Message sent with every shape-gate rejection
pub const BAD_TYPE: &str = "Bad type";

/// Message sent with every session-cookie rejection
pub const MISSING_SESSION_COOKIE: &str =
    "Cookie was required for request but no cookie was found";

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant maps to one HTTP status code.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body failed the field-shape check
    #[error("Bad type")]
    BadType,

    /// Session cookie missing, unsigned, or not a valid token shape
    #[error("Cookie was required for request but no cookie was found")]
    MissingSessionCookie,

    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Referenced record does not exist
    #[error("{what} not found")]
    NotFound {
        /// What was looked up (e.g. "User")
        what: &'static str,
    },

    /// Unique value already taken
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (entity validation, display name)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Document store error
    ///
    /// Details are logged, never sent to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal processing error (e.g. a blocking task panicked)
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },
}

impl From<ValidationFailure> for BackendError {
    fn from(failure: ValidationFailure) -> Self {
        Self::SharedError(SharedError::ValidationFailed(failure))
    }
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Shorthand for a 400 handler error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(what: &'static str) -> Self {
        Self::NotFound { what }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadType` - 400 Bad Request
    /// - `MissingSessionCookie` - 403 Forbidden
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `SharedError` - 400 Bad Request
    /// - `Database`, `StateError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadType => StatusCode::BAD_REQUEST,
            Self::MissingSessionCookie => StatusCode::FORBIDDEN,
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::BadType => BAD_TYPE.to_string(),
            Self::MissingSessionCookie => MISSING_SESSION_COOKIE.to_string(),
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { .. } => self.to_string(),
            Self::Conflict { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::Database(_) => "Database error".to_string(),
            Self::StateError { message } => message.clone(),
        }
    }
}
