//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - Account, board and live routes
//! ```
//!
//! # Routes
//!
//! | Method | Path | Gate |
//! |---|---|---|
//! | GET | `/requiredCookieRoute` | session cookie |
//! | POST | `/user` | field shape |
//! | POST | `/user/isValid` | field shape |
//! | POST | `/user/logout` | session cookie |
//! | GET | `/entry` | none |
//! | POST | `/entry` | field shape |
//! | POST | `/reply` | field shape |
//! | GET | `/live` | none (frames are shape-checked) |
//! | GET | `/health` | none |

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
