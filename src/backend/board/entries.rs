/**
 * Entry Model and Database Operations
 *
 * Entries are the top-level posts of the board. They are listed in the
 * order they were created.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::ids::new_object_id;
use crate::shared::validation::{char_len, Validate, Violation};

/// Bodies must stay under this many characters
pub const MAX_MESSAGE_LEN: usize = 500;

/// Entry stored in the `entries` table
///
/// Serialized as `{_id, message, username, likes}` on the live channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Entry {
    #[serde(rename = "_id")]
    pub id: String,
    pub message: String,
    /// Author handle
    pub username: String,
    pub likes: i64,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// New entry with no likes
    pub fn new(message: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: new_object_id(),
            message: message.into(),
            username: username.into(),
            likes: 0,
            created_at: Utc::now(),
        }
    }
}

impl Validate for Entry {
    const ENTITY: &'static str = "Entry";

    fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if char_len(&self.message) >= MAX_MESSAGE_LEN {
            violations.push(Violation::new(
                "message",
                "message needs to be less than 500 characters",
            ));
        }
        if self.username.is_empty() {
            violations.push(Violation::new(
                "username",
                "username is required to not be null or undefined",
            ));
        }
        if self.likes < 0 {
            violations.push(Violation::new(
                "likes",
                "likes need to be greater than or equal to 0",
            ));
        }
        violations
    }
}

/// Validate and insert an entry
pub async fn create_entry(pool: &SqlitePool, entry: Entry) -> Result<Entry, BackendError> {
    entry.validate()?;

    sqlx::query(
        r#"
        INSERT INTO entries (id, message, username, likes, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&entry.id)
    .bind(&entry.message)
    .bind(&entry.username)
    .bind(entry.likes)
    .bind(entry.created_at)
    .execute(pool)
    .await?;

    Ok(entry)
}

/// All entries in creation order
pub async fn list_entries(pool: &SqlitePool) -> Result<Vec<Entry>, sqlx::Error> {
    sqlx::query_as::<_, Entry>(
        "SELECT id, message, username, likes, created_at FROM entries ORDER BY rowid",
    )
    .fetch_all(pool)
    .await
}
