// SPDX-License-Identifier: Apache-2.0

//! SQLite-backed user lookup.
//!
//! Every query binds its inputs as parameters; request values are never
//! spliced into SQL text.

use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use tracing::{debug, instrument};

use crate::config::DatabaseConfig;
use crate::error::SafewebError;

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact address, if known.
    pub email: Option<String>,
}

/// Handle to the user database.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: Pool<Sqlite>,
}

impl UserStore {
    /// Open (or create) the database file from `settings` and ensure the schema.
    pub async fn connect(settings: &DatabaseConfig) -> Result<Self, SafewebError> {
        let options = SqliteConnectOptions::new()
            .filename(&settings.path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections.max(1))
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        debug!(path = %settings.path.display(), "user database ready");
        Ok(store)
    }

    /// Open a private in-memory database. Intended for tests and demos.
    pub async fn in_memory() -> Result<Self, SafewebError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), SafewebError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id    INTEGER PRIMARY KEY,
                name  TEXT NOT NULL,
                email TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a user and return its id.
    #[instrument(skip(self, email))]
    pub async fn insert(&self, name: &str, email: Option<&str>) -> Result<i64, SafewebError> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Look up users by id.
    ///
    /// Returns an empty list when nothing matches.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Vec<User>, SafewebError> {
        let rows = sqlx::query("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        let users = rows
            .iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
            })
            .collect::<Vec<_>>();

        debug!(count = users.len(), "user lookup finished");
        Ok(users)
    }

    /// Look up users by exact name.
    #[cfg(test)]
    pub(crate) async fn find_by_name(&self, name: &str) -> Result<Vec<User>, SafewebError> {
        let rows = sqlx::query("SELECT id, name, email FROM users WHERE name = ? ORDER BY id")
            .bind(name)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
            })
            .collect())
    }
}
