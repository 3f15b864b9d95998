/**
 * Server Initialization
 *
 * This module builds the application from an open database and the
 * resolved configuration.
 *
 * # Initialization Process
 *
 * 1. Create the entry broadcast channel and derive the cookie key
 * 2. Assemble `AppState` around the connection pool
 * 3. Create and configure the router
 *
 * The database is opened (and migrated) by the caller so its lifetime can
 * outlive the router and be closed explicitly at shutdown.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::Database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(db: &Database, config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing postboard backend server");

    let app_state = AppState::new(db.pool().clone(), config);
    tracing::info!(
        "Live channel ready (capacity {})",
        config.live_channel_capacity
    );

    let app = create_router(app_state, config.cors_origin.as_deref());
    tracing::info!("Router configured");

    app
}
