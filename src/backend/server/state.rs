/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The cookie signing key
 * - The broadcast channel feeding live listeners
 * - The bcrypt work factor
 *
 * # Thread Safety
 *
 * Nothing here needs a lock: the pool and `broadcast::Sender` are internally
 * synchronized, and the key and cost are read-only.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers and extractors to pull out
 * only the part they need, e.g. `State(pool): State<SqlitePool>`, and let
 * the session gate find the signing key.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use tokio::sync::broadcast;
use tower_cookies::Key;

use crate::backend::realtime::broadcast::EntryBroadcast;
use crate::backend::server::config::ServerConfig;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Document store connection pool
    pub db: SqlitePool,

    /// Key signing and verifying the `sessionID` cookie
    pub cookie_key: Key,

    /// Newly created entries, fanned out to every live listener
    ///
    /// Listeners subscribe when their socket opens and only see entries
    /// sent after that.
    pub entry_broadcast: EntryBroadcast,

    /// bcrypt work factor used at registration
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Build state from an open pool and the resolved configuration
    pub fn new(db: SqlitePool, config: &ServerConfig) -> Self {
        let (entry_broadcast, _) = broadcast::channel(config.live_channel_capacity);
        Self {
            db,
            cookie_key: config.cookie_key(),
            entry_broadcast,
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookie_key.clone()
    }
}

impl FromRef<AppState> for EntryBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.entry_broadcast.clone()
    }
}
