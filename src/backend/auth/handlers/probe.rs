/**
 * Protected Probe Handler
 *
 * GET /requiredCookieRoute answers with the handle of the account that owns
 * the session cookie, as plain text. It is the simplest route behind the
 * session gate and lets a client check whether it is still logged in.
 */

use axum::extract::State;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::find_session;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::SessionCookie;

/// Probe handler
///
/// # Errors
///
/// * `403 Forbidden` - no valid session cookie (from the gate)
/// * `400 Bad Request` - the session or its account no longer exists
pub async fn required_cookie_route(
    State(pool): State<SqlitePool>,
    session: SessionCookie,
) -> Result<String, BackendError> {
    let session = find_session(&pool, session.token()).await?.ok_or_else(|| {
        tracing::warn!("Cookie names an unknown session");
        BackendError::bad_request("Session not found")
    })?;

    let user = get_user_by_id(&pool, &session.user_id).await?.ok_or_else(|| {
        tracing::warn!("Session {} has no account", session.user_id);
        BackendError::bad_request("Session not found")
    })?;

    Ok(user.username)
}
