/**
 * Document Store Lifecycle
 *
 * The board keeps accounts, sessions, entries and replies in SQLite through
 * `sqlx`. The store is opened once at startup, migrated, handed to the
 * application state, and closed explicitly on shutdown.
 *
 * # In-Memory Databases
 *
 * `sqlite::memory:` gives every connection its own database, so in-memory
 * URLs are served by a single connection that is never recycled.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Owned handle to the document store
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the store at `database_url` and run pending migrations
    ///
    /// # Errors
    ///
    /// Returns the `sqlx` error if the URL is invalid, the file cannot be
    /// opened, or a migration fails.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        tracing::info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(8)
                .connect_with(options)
                .await?
        };

        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database ready");

        Ok(Self { pool })
    }

    /// Connection pool shared with request handlers
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection, waiting for in-flight queries
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Database connections closed");
    }
}
