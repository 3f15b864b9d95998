/**
 * Reply Handler
 *
 * `POST /reply` stores a reply under an entry. The author is looked up by
 * handle and stored by account id; the parent entry id is only checked for
 * width by the reply validator.
 */

use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_username;
use crate::backend::board::handlers::types::ReplyParams;
use crate::backend::board::replies::{create_reply, Reply};
use crate::backend::error::BackendError;
use crate::backend::middleware::StrongParams;

/// Post reply handler
///
/// # Errors
///
/// * `400 Bad Request` - empty message, or the reply fails validation
/// * `404 Not Found` - no account has that handle
pub async fn post_reply(
    State(pool): State<SqlitePool>,
    StrongParams(params): StrongParams<ReplyParams>,
) -> Result<StatusCode, BackendError> {
    if params.message.is_empty() {
        return Err(BackendError::bad_request("Reply message can't be empty"));
    }

    let author = get_user_by_username(&pool, &params.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Reply author not found: {}", params.username);
            BackendError::not_found("User")
        })?;

    let reply = create_reply(&pool, Reply::new(params.message, author.id, params.entry_id)).await?;
    tracing::info!("Reply {} added to entry {}", reply.id, reply.entry_id);

    Ok(StatusCode::CREATED)
}
