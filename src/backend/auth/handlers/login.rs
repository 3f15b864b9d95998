/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /user/isValid.
 *
 * # Authentication Process
 *
 * 1. Look up the account by email
 * 2. Verify the credential with bcrypt
 * 3. Mint and store a session token
 * 4. Set the signed `sessionID` cookie
 * 5. Return display name and username
 *
 * # Security
 *
 * - Unknown email, wrong credential and empty email all return the same
 *   400 response (no account enumeration)
 * - bcrypt comparison is constant-time and runs on a blocking thread
 * - An unknown email still pays for one bcrypt hash at the configured cost
 * - The cookie is HttpOnly, Secure and signed
 */

use axum::{extract::State, response::Json};
use tower_cookies::{Cookie, Cookies};

use crate::backend::auth::handlers::types::{LoginParams, LoginResponse};
use crate::backend::auth::sessions::create_session;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::middleware::{StrongParams, SESSION_COOKIE_NAME};
use crate::backend::server::state::AppState;

/// Message for every rejected login
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - empty email, unknown email or wrong credential
/// * `500 Internal Server Error` - the store failed
///
/// # Example Request
///
/// ```http
/// POST /user/isValid HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "rob@example.com", "password": "hunter22"}
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Set-Cookie: sessionID=<signed token>; HttpOnly; Secure; Path=/
///
/// {"name": "Rob Smith", "username": "rob"}
/// ```
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    StrongParams(params): StrongParams<LoginParams>,
) -> Result<Json<LoginResponse>, BackendError> {
    if params.email.is_empty() {
        tracing::warn!("Login request without email");
        return Err(BackendError::bad_request(INVALID_CREDENTIALS));
    }

    let user = get_user_by_email(&state.db, &params.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::from(e)
        })?;

    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let valid = verify_credential(params.password, stored_hash, state.bcrypt_cost).await?;

    let user = match user {
        Some(user) if valid => user,
        Some(user) => {
            tracing::warn!("Invalid password for: {}", user.username);
            return Err(BackendError::bad_request(INVALID_CREDENTIALS));
        }
        None => {
            tracing::warn!("Login for unknown email: {}", params.email);
            return Err(BackendError::bad_request(INVALID_CREDENTIALS));
        }
    };

    let session = create_session(&state.db, &user.id).await?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, session.session_id))
        .http_only(true)
        .secure(true)
        .path("/")
        .build();
    cookies.signed(&state.cookie_key).add(cookie);

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(LoginResponse {
        name: user.display_name(),
        username: user.username,
    }))
}

/// Check `password` against the stored bcrypt hash on a blocking thread
///
/// With no stored hash the password is hashed once at `cost` and rejected,
/// so unknown accounts take as long as known ones. An unreadable hash
/// counts as a mismatch.
async fn verify_credential(
    password: String,
    stored_hash: Option<String>,
    cost: u32,
) -> Result<bool, BackendError> {
    tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => bcrypt::verify(password, &hash).unwrap_or_else(|e| {
            tracing::error!("Password verification error: {:?}", e);
            false
        }),
        None => {
            let _ = bcrypt::hash(password, cost);
            false
        }
    })
    .await
    .map_err(|e| {
        tracing::error!("Verification task failed: {:?}", e);
        BackendError::state("Failed to verify password")
    })
}
