/**
 * Session Tokens and Session Store
 *
 * A successful login mints a random token, stores it with the owning
 * account id, and hands it to the browser in the signed `sessionID` cookie.
 * Protected routes map the cookie back to the account through this table.
 *
 * # Token Format
 *
 * Lowercase hex SHA-256 of the current unix time in milliseconds followed by
 * a random number, redrawn until it passes the session-cookie gate.
 */

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::ids::OBJECT_ID_LEN;
use crate::backend::middleware::session_cookie::is_valid_session_token;
use crate::shared::validation::{char_len, Validate, Violation};

/// Session stored in the `sessions` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// New session for `user_id` with a freshly minted token
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            session_id: mint_session_token(),
            user_id: user_id.into(),
            created_at: Utc::now(),
        }
    }
}

impl Validate for Session {
    const ENTITY: &'static str = "Session";

    fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if !is_valid_session_token(&self.session_id) {
            violations.push(Violation::new(
                "sessionID",
                "sessionID must be a 64 character mixed hex digest",
            ));
        }
        if char_len(&self.user_id) != OBJECT_ID_LEN {
            violations.push(Violation::new("userID", "userID is 24 characters"));
        }
        violations
    }
}

/// Mint a session token that passes the cookie gate
pub fn mint_session_token() -> String {
    loop {
        let seed = format!(
            "{}{}",
            Utc::now().timestamp_millis(),
            rand::random::<u64>()
        );
        let digest = Sha256::digest(seed.as_bytes());
        let token: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        if is_valid_session_token(&token) {
            return token;
        }
    }
}

/// Validate and store a new session for `user_id`
pub async fn create_session(pool: &SqlitePool, user_id: &str) -> Result<Session, BackendError> {
    let session = Session::new(user_id);
    session.validate()?;

    sqlx::query("INSERT INTO sessions (session_id, user_id, created_at) VALUES (?, ?, ?)")
        .bind(&session.session_id)
        .bind(&session.user_id)
        .bind(session.created_at)
        .execute(pool)
        .await?;

    Ok(session)
}

pub async fn find_session(pool: &SqlitePool, token: &str) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as::<_, Session>(
        "SELECT session_id, user_id, created_at FROM sessions WHERE session_id = ?",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Delete the session with `token`
///
/// Returns whether a session was removed.
pub async fn delete_session(pool: &SqlitePool, token: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE session_id = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
