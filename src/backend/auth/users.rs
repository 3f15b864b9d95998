/**
 * Account Model and Database Operations
 *
 * This module holds the account entity, its validation rules, and the
 * queries that read and write the `users` table. Every insert validates the
 * account first; an invalid account is never written.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::ids::new_object_id;
use crate::shared::validation::{char_len, contains_digit, Validate, Violation};
use crate::shared::SharedError;

/// Longest accepted handle is one less than this
pub const MAX_USERNAME_LEN: usize = 30;

/// Account stored in the `users` table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 24-character object id
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Public handle
    pub username: String,
    /// bcrypt hash of the credential
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new, not yet stored account with a fresh id
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: new_object_id(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// `firstName lastName`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Split `value` on its single space into given and family name
    ///
    /// Fails, leaving both names untouched, unless `value` is exactly two
    /// non-empty words separated by one space.
    pub fn set_display_name(&mut self, value: &str) -> Result<(), SharedError> {
        match value.split(' ').collect::<Vec<_>>().as_slice() {
            [first, last] if !first.is_empty() && !last.is_empty() => {
                self.first_name = first.to_string();
                self.last_name = last.to_string();
                Ok(())
            }
            _ => Err(SharedError::invalid_display_name(value)),
        }
    }
}

impl Validate for User {
    const ENTITY: &'static str = "User";

    fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        // Display name must split back into exactly these two words
        if self.first_name.is_empty() {
            violations.push(Violation::new("firstName", "first name is required"));
        } else if self.first_name.contains(' ') {
            violations.push(Violation::new("firstName", "no spaces allowed in first name"));
        }
        if contains_digit(&self.first_name) {
            violations.push(Violation::new("firstName", "no numbers allowed in first name"));
        }
        if self.last_name.is_empty() {
            violations.push(Violation::new("lastName", "last name is required"));
        } else if self.last_name.contains(' ') {
            violations.push(Violation::new("lastName", "no spaces allowed in last name"));
        }
        if contains_digit(&self.last_name) {
            violations.push(Violation::new("lastName", "no numbers allowed in last name"));
        }
        if !self.email.contains('@') {
            violations.push(Violation::new("email", "You need an @ in email"));
        }
        if self.username.is_empty() {
            violations.push(Violation::new("username", "username is required"));
        } else if char_len(&self.username) >= MAX_USERNAME_LEN {
            violations.push(Violation::new(
                "username",
                "username needs to be less than 30 characters long",
            ));
        }
        if !self.password_hash.starts_with("$2") {
            violations.push(Violation::new("password", "password hash needs to start with $2"));
        }

        violations
    }
}

/// Validate and insert an account
///
/// # Errors
///
/// * `SharedError` - the account breaks a validation rule
/// * `Conflict` - the handle or email is already taken
/// * `Database` - the insert failed
pub async fn create_user(pool: &SqlitePool, user: User) -> Result<User, BackendError> {
    user.validate()?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (id, first_name, last_name, email, username, password_hash, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.id)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(user),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(BackendError::conflict("Username or email already registered"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Get account by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, first_name, last_name, email, username, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get account by handle
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, first_name, last_name, email, username, password_hash, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, first_name, last_name, email, username, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
