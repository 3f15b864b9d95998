//! Request Gates
//!
//! Extractors that run before a handler body and reject the request on
//! their own:
//!
//! - **`strong_params`** - JSON body field-shape check (400 `Bad type`)
//! - **`session_cookie`** - signed `sessionID` cookie check (403)
//!
//! Within one request the shape gate finishes before any store access, and
//! the cookie gate finishes before the session lookup.

/// Field-shape validation of JSON bodies
pub mod strong_params;

/// Session cookie gate
pub mod session_cookie;

pub use session_cookie::{is_valid_session_token, SessionCookie, SESSION_COOKIE_NAME};
pub use strong_params::{check_shape, DeclaredParams, FieldKind, ShapeError, StrongParams};
