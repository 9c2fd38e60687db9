//! Message repository
//!
//! Each operation is a single auto-committed statement. Values are always
//! bound as parameters.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Message record from database
#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Message repository
pub struct MessageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a submission, returning the id assigned by the database.
    ///
    /// `submitted_at` is filled in by the column default.
    pub async fn insert_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<i32, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::Query)?;

        Ok(id)
    }

    /// List every stored message, newest first.
    ///
    /// A row that fails to decode aborts the whole read.
    pub async fn list_messages(&self) -> Result<Vec<Message>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, message, submitted_at
            FROM messages
            ORDER BY submitted_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(DbError::Query)?;

        rows.iter()
            .map(|row| Message::from_row(row).map_err(DbError::Decode))
            .collect()
    }
}
