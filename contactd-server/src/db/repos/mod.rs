//! Repository implementations for database access

pub mod messages;

pub use messages::{Message, MessageRepo};

/// Database error type
///
/// Both variants are persistence failures; they are kept apart so the
/// HTTP layer can tell a failed query from a row it could not read.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Query(#[source] sqlx::Error),

    #[error("failed to decode row: {0}")]
    Decode(#[source] sqlx::Error),
}
