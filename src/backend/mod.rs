//! Backend Module
//!
//! This module contains all server-side code for the postboard message
//! board: an Axum HTTP server with cookie sessions, request-shape gates,
//! SQLite storage and a live WebSocket feed.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, database lifecycle, application state
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - Field-shape and session-cookie gates
//! - **`auth`** - Accounts, sessions, register/login/logout
//! - **`board`** - Entries and replies
//! - **`realtime`** - Live entry fan-out over WebSockets
//! - **`error`** - Backend-specific error types
//! - **`ids`** - 24-character object ids
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── ids.rs          - Object id generation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request gates
//! ├── auth/           - Accounts and sessions
//! ├── board/          - Entries and replies
//! ├── realtime/       - Live fan-out
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! request -> field-shape gate -> (protected) session-cookie gate
//!         -> session lookup -> operation -> response
//! ```
//!
//! Entries created over HTTP or the live socket are also published to every
//! connected listener.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; gates use the same type as
//! their rejection, so every failure becomes a JSON body
//! `{"error": ..., "status": ...}` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Request gates
pub mod middleware;

/// Accounts and sessions
pub mod auth;

/// Entries and replies
pub mod board;

/// Live update fan-out
pub mod realtime;

/// Backend error types
pub mod error;

/// Object id generation
pub mod ids;

pub use error::BackendError;
pub use server::{create_app, AppState, Database, ServerConfig};
