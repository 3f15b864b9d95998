/**
 * Entry Handlers
 *
 * `POST /entry` creates an entry and publishes it to live listeners;
 * `GET /entry` lists every entry in creation order.
 *
 * Entry creation is shared with the live socket through [`publish_entry`],
 * so both paths apply the same rules.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_username;
use crate::backend::board::entries::{self, create_entry, Entry};
use crate::backend::board::handlers::types::{EntryParams, EntrySummary};
use crate::backend::error::BackendError;
use crate::backend::middleware::StrongParams;
use crate::backend::realtime::broadcast::{broadcast_entry, EntryBroadcast};

/// Create, store and broadcast an entry
///
/// # Errors
///
/// * `400` - message or username is empty, or the entry fails validation
/// * `404` - no account has that handle
/// * `500` - the store failed
pub async fn publish_entry(
    pool: &SqlitePool,
    broadcast_tx: &EntryBroadcast,
    params: EntryParams,
) -> Result<Entry, BackendError> {
    if params.message.is_empty() || params.username.is_empty() {
        return Err(BackendError::bad_request("Entry fields can't be empty"));
    }

    if get_user_by_username(pool, &params.username).await?.is_none() {
        tracing::warn!("Entry author not found: {}", params.username);
        return Err(BackendError::not_found("User"));
    }

    let entry = create_entry(pool, Entry::new(params.message, params.username)).await?;
    tracing::info!("Entry {} created by {}", entry.id, entry.username);

    broadcast_entry(broadcast_tx, entry.clone());
    Ok(entry)
}

/// Post entry handler
///
/// # Example Request
///
/// ```http
/// POST /entry HTTP/1.1
/// Content-Type: application/json
///
/// {"message": "hello board", "username": "rob"}
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 201 Created
///
/// "65f1c0de9a3b4e7f12ab34cd"
/// ```
pub async fn post_entry(
    State(pool): State<SqlitePool>,
    State(broadcast_tx): State<EntryBroadcast>,
    StrongParams(params): StrongParams<EntryParams>,
) -> Result<(StatusCode, Json<String>), BackendError> {
    let entry = publish_entry(&pool, &broadcast_tx, params).await?;
    Ok((StatusCode::CREATED, Json(entry.id)))
}

/// List entries handler
pub async fn list_entries(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<EntrySummary>>, BackendError> {
    let entries = entries::list_entries(&pool).await.map_err(|e| {
        tracing::error!("Failed to list entries: {:?}", e);
        BackendError::from(e)
    })?;

    Ok(Json(entries.into_iter().map(EntrySummary::from).collect()))
}
