/**
 * Reply Model and Database Operations
 *
 * A reply points at its author by account id and at its parent entry by
 * entry id. Only the width of those ids is checked; the parent entry is not
 * looked up.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::board::entries::MAX_MESSAGE_LEN;
use crate::backend::error::BackendError;
use crate::backend::ids::{new_object_id, OBJECT_ID_LEN};
use crate::shared::validation::{char_len, Validate, Violation};

/// Reply stored in the `replies` table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Reply {
    #[serde(rename = "_id")]
    pub id: String,
    pub message: String,
    /// Author account id
    #[serde(rename = "creatorID")]
    pub creator_id: String,
    /// Parent entry id
    #[serde(rename = "entryID")]
    pub entry_id: String,
    pub likes: i64,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(
        message: impl Into<String>,
        creator_id: impl Into<String>,
        entry_id: impl Into<String>,
    ) -> Self {
        Self {
            id: new_object_id(),
            message: message.into(),
            creator_id: creator_id.into(),
            entry_id: entry_id.into(),
            likes: 0,
            created_at: Utc::now(),
        }
    }
}

impl Validate for Reply {
    const ENTITY: &'static str = "Reply";

    fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if char_len(&self.message) >= MAX_MESSAGE_LEN {
            violations.push(Violation::new("message", "message is under 500 characters"));
        }
        if char_len(&self.creator_id) != OBJECT_ID_LEN {
            violations.push(Violation::new("creatorID", "creatorID is 24 characters"));
        }
        if char_len(&self.entry_id) != OBJECT_ID_LEN {
            violations.push(Violation::new("entryID", "entryID is 24 characters"));
        }
        if self.likes < 0 {
            violations.push(Violation::new(
                "likes",
                "likes need be greater than or equal to 0",
            ));
        }
        violations
    }
}

/// Validate and insert a reply
pub async fn create_reply(pool: &SqlitePool, reply: Reply) -> Result<Reply, BackendError> {
    reply.validate()?;

    sqlx::query(
        r#"
        INSERT INTO replies (id, message, creator_id, entry_id, likes, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&reply.id)
    .bind(&reply.message)
    .bind(&reply.creator_id)
    .bind(&reply.entry_id)
    .bind(reply.likes)
    .bind(reply.created_at)
    .execute(pool)
    .await?;

    Ok(reply)
}
