/**
 * API Route Handlers
 *
 * This module attaches the board's endpoints to a router.
 *
 * # Routes
 *
 * ## Accounts
 * - `POST /user` - Register
 * - `POST /user/isValid` - Login, sets the session cookie
 * - `POST /user/logout` - Logout (session cookie required)
 * - `GET /requiredCookieRoute` - Caller's handle (session cookie required)
 *
 * ## Board
 * - `GET /entry` - List entries
 * - `POST /entry` - Post entry
 * - `POST /reply` - Post reply
 *
 * ## Live
 * - `GET /live` - WebSocket entry feed
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout, register, required_cookie_route};
use crate::backend::board::{list_entries, post_entry, post_reply};
use crate::backend::realtime::live_socket;
use crate::backend::server::state::AppState;

/// Add account routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/user", post(register))
        .route("/user/isValid", post(login))
        .route("/user/logout", post(logout))
        .route("/requiredCookieRoute", get(required_cookie_route))
}

/// Add entry and reply routes
pub fn configure_board_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/entry", get(list_entries).post(post_entry))
        .route("/reply", post(post_reply))
}

/// Add the live socket route
pub fn configure_live_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/live", get(live_socket))
}

/// Add every API route
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    let router = configure_auth_routes(router);
    let router = configure_board_routes(router);
    configure_live_routes(router)
}
