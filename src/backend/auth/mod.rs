//! Authentication Module
//!
//! This module handles account registration, login, and cookie sessions.
//!
//! # Architecture
//!
//! - **`users`** - Account model, validation and queries
//! - **`sessions`** - Session token minting and the session store
//! - **`handlers`** - HTTP handlers for account endpoints
//!
//! # Security
//!
//! - Credentials are hashed with bcrypt before storage
//! - Sessions are opaque random tokens stored server-side
//! - The token travels in an HttpOnly, Secure, signed cookie
//! - Failed logins return one generic 400 (no account enumeration)

/// Account model and database operations
pub mod users;

/// Session tokens and session store
pub mod sessions;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use handlers::{login, logout, register, required_cookie_route};
pub use sessions::Session;
pub use users::User;
