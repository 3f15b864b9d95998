//! Postboard - Main Library
//!
//! Postboard is a small message-board backend built with Axum: accounts
//! register and log in, post short entries, reply to entries, and receive
//! new entries live over a WebSocket.
//!
//! # Module Structure
//!
//! - **`shared`** - Entity validation and errors independent of HTTP
//!   - `Validate` trait and `(field, message)` violations
//!   - `SharedError`
//!
//! - **`backend`** - The server
//!   - Field-shape ("strong params") and session-cookie gates
//!   - Account, session, entry and reply storage in SQLite
//!   - Live entry fan-out over `tokio::sync::broadcast`
//!
//! # Usage
//!
//! ```rust,no_run
//! use postboard::backend::server::{create_app, Database, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let db = Database::connect(&config.database_url).await?;
//! let app = create_app(&db, &config);
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Entity rules fail with `shared::ValidationFailure`
//! - HTTP-facing failures are `backend::BackendError`, which renders as a
//!   JSON error body with the right status code

/// Shared validation and error types
pub mod shared;

/// Backend server-side code
pub mod backend;
