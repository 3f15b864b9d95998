//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - Account registration handler
//! ├── login.rs    - Login handler, sets the session cookie
//! ├── logout.rs   - Logout handler, clears the session cookie
//! └── probe.rs    - Protected probe returning the caller's handle
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /user
//! - **`login`** - POST /user/isValid
//! - **`logout`** - POST /user/logout
//! - **`required_cookie_route`** - GET /requiredCookieRoute
//!
//! # Session Flow
//!
//! 1. **Register**: account created, nothing else
//! 2. **Login**: credential verified → session stored → signed cookie set
//! 3. **Protected routes**: cookie checked by the gate → session → account
//! 4. **Logout**: session deleted → cookie removed

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Protected probe handler
pub mod probe;

pub use types::{LoginParams, LoginResponse, RegisterParams, RegisterResponse};

pub use login::login;
pub use logout::logout;
pub use probe::required_cookie_route;
pub use register::register;
