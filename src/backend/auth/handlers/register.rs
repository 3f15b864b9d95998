/**
 * Register Handler
 *
 * This module implements the account registration handler for POST /user.
 *
 * # Registration Process
 *
 * 1. Field shapes checked by `StrongParams` (400 `Bad type`)
 * 2. Username, email and password must be non-empty
 * 3. Username and email must be unused (409)
 * 4. Hash the credential with bcrypt on a blocking thread
 * 5. Validate and store the account
 * 6. Return email, username and display name
 *
 * # Security
 *
 * - Credentials are hashed with the configured bcrypt cost
 * - Credentials and hashes are never returned or logged
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterParams, RegisterResponse};
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username, User};
use crate::backend::error::BackendError;
use crate::backend::middleware::StrongParams;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - empty username, email or password, or the account
///   fails validation
/// * `409 Conflict` - username or email already registered
/// * `500 Internal Server Error` - hashing or the store failed
///
/// # Example Request
///
/// ```http
/// POST /user HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "rob",
///   "password": "hunter22",
///   "email": "rob@example.com",
///   "firstName": "Rob",
///   "lastName": "Smith"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {"email": "rob@example.com", "username": "rob", "name": "Rob Smith"}
/// ```
pub async fn register(
    State(state): State<AppState>,
    StrongParams(params): StrongParams<RegisterParams>,
) -> Result<Json<RegisterResponse>, BackendError> {
    tracing::info!("Register request for: {}", params.username);

    if params.username.is_empty() || params.email.is_empty() || params.password.is_empty() {
        tracing::warn!("Register request with empty fields");
        return Err(BackendError::bad_request("Register fields can't be empty"));
    }

    if get_user_by_username(&state.db, &params.username).await?.is_some() {
        tracing::warn!("Username already taken: {}", params.username);
        return Err(BackendError::conflict("Username already registered"));
    }
    if get_user_by_email(&state.db, &params.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", params.email);
        return Err(BackendError::conflict("Email already registered"));
    }

    let password = params.password;
    let cost = state.bcrypt_cost;
    let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| {
            tracing::error!("Hashing task failed: {:?}", e);
            BackendError::state("Failed to hash password")
        })?
        .map_err(|e| {
            tracing::error!("Password hashing error: {:?}", e);
            BackendError::state("Failed to hash password")
        })?;

    let user = create_user(
        &state.db,
        User::new(
            params.first_name,
            params.last_name,
            params.email,
            params.username,
            password_hash,
        ),
    )
    .await?;

    tracing::info!("Account registered: {} ({})", user.username, user.id);

    Ok(Json(RegisterResponse {
        name: user.display_name(),
        email: user.email,
        username: user.username,
    }))
}
