/**
 * Logout Handler
 *
 * POST /user/logout deletes the session named by the cookie and clears the
 * cookie. The session gate has already rejected requests without a valid
 * cookie.
 */

use axum::{extract::State, http::StatusCode};
use tower_cookies::{Cookie, Cookies};

use crate::backend::auth::sessions::delete_session;
use crate::backend::error::BackendError;
use crate::backend::middleware::{SessionCookie, SESSION_COOKIE_NAME};
use crate::backend::server::state::AppState;

pub async fn logout(
    State(state): State<AppState>,
    session: SessionCookie,
    cookies: Cookies,
) -> Result<StatusCode, BackendError> {
    if !delete_session(&state.db, session.token()).await? {
        tracing::debug!("Logout for a session that was already gone");
    }

    cookies
        .signed(&state.cookie_key)
        .remove(Cookie::build(SESSION_COOKIE_NAME).path("/").build());

    tracing::info!("Session closed");
    Ok(StatusCode::OK)
}
