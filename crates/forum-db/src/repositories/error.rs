//! Error handling utilities for repositories

use forum_core::error::DomainError;
use forum_core::value_objects::{CommentKey, ThreadKey};
use sqlx::Error as SqlxError;

/// How many times an insert is retried when the allocated id collides
pub const ALLOC_RETRIES: u32 = 3;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check whether a SQLx error is a unique constraint violation
pub fn is_unique_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

/// Check whether a SQLx error is a foreign key constraint violation
pub fn is_foreign_key_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_foreign_key_violation)
}

/// Create a "user not found" error
pub fn user_not_found(username: &str) -> DomainError {
    DomainError::UserNotFound(username.to_string())
}

/// Create a "channel not found" error
pub fn channel_not_found(name: &str) -> DomainError {
    DomainError::ChannelNotFound(name.to_string())
}

/// Create a "thread not found" error
pub fn thread_not_found(key: &ThreadKey) -> DomainError {
    DomainError::ThreadNotFound(key.clone())
}

/// Create a "comment not found" error
pub fn comment_not_found(key: &CommentKey) -> DomainError {
    DomainError::CommentNotFound(key.clone())
}
