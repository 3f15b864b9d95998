//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`config`** - Configuration loading and validation
//! - **`database`** - SQLite pool lifecycle and migrations
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── database.rs     - Database connect/close
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: `Database::connect` opens the pool and runs migrations
//! 3. **State Creation**: pool, cookie key, broadcast channel
//! 4. **Router Creation**: routes and layers
//! 5. **Shutdown**: the binary closes the pool after the server stops

/// Server configuration loading
pub mod config;

/// Database lifecycle
pub mod database;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use database::Database;
pub use init::create_app;
pub use state::AppState;
