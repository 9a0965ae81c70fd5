//! PostgreSQL implementation of ThreadRepository
//!
//! Thread ids are allocated inside the INSERT itself: the statement computes
//! `MAX(thread_id) + 1` over the channel and inserts in one atomic step, so
//! two racing writers can never read the same stale maximum. If they still
//! collide, the primary key on (channel_name, thread_id) rejects the loser,
//! and the insert is retried a bounded number of times.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use forum_core::entities::{NewThread, Thread};
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, ThreadRepository};
use forum_core::value_objects::{ChannelName, ThreadKey};

use crate::mappers::thread_from_model;
use crate::models::ThreadModel;

use super::error::{
    channel_not_found, is_foreign_key_violation, is_unique_violation, map_db_error,
    thread_not_found, ALLOC_RETRIES,
};

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Posting counts as channel activity, so the insert and the channel's
    /// recent_at bump commit together.
    async fn try_insert(&self, thread: &NewThread) -> Result<ThreadModel, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let model = sqlx::query_as::<_, ThreadModel>(
            r"
            INSERT INTO threads (channel_name, thread_id, name, description, owner, pinned, created_at, recent_at)
            SELECT $1, COALESCE(MAX(thread_id) + 1, 0), $2, $3, $4, FALSE, NOW(), NOW()
            FROM threads
            WHERE channel_name = $1
            RETURNING channel_name, thread_id, name, description, owner, pinned, created_at, recent_at
            ",
        )
        .bind(thread.channel.as_str())
        .bind(&thread.name)
        .bind(&thread.description)
        .bind(&thread.owner)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r"
            UPDATE channels SET recent_at = NOW() WHERE channel_name = $1
            ",
        )
        .bind(thread.channel.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(model)
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self))]
    async fn find(&self, key: &ThreadKey) -> RepoResult<Option<Thread>> {
        let result = sqlx::query_as::<_, ThreadModel>(
            r"
            SELECT channel_name, thread_id, name, description, owner, pinned, created_at, recent_at
            FROM threads
            WHERE channel_name = $1 AND thread_id = $2
            ",
        )
        .bind(key.channel.as_str())
        .bind(key.thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(thread_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_channel(&self, channel: &ChannelName) -> RepoResult<Vec<Thread>> {
        let results = sqlx::query_as::<_, ThreadModel>(
            r"
            SELECT channel_name, thread_id, name, description, owner, pinned, created_at, recent_at
            FROM threads
            WHERE channel_name = $1
            ORDER BY pinned DESC, recent_at DESC
            ",
        )
        .bind(channel.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(thread_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, thread: &NewThread) -> RepoResult<Thread> {
        for attempt in 1..=ALLOC_RETRIES {
            match self.try_insert(thread).await {
                Ok(model) => return thread_from_model(model),
                Err(e) if is_unique_violation(&e) => {
                    warn!(
                        channel = %thread.channel,
                        attempt,
                        "thread id collision, retrying insert"
                    );
                }
                // The channel was deleted between the caller's checks and
                // the insert
                Err(e) if is_foreign_key_violation(&e) => {
                    return Err(channel_not_found(thread.channel.as_str()));
                }
                Err(e) => return Err(map_db_error(e)),
            }
        }

        Err(DomainError::SequenceConflict {
            attempts: ALLOC_RETRIES,
        })
    }

    #[instrument(skip(self))]
    async fn update(&self, thread: &Thread) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE threads
            SET name = $3, description = $4, owner = $5, pinned = $6
            WHERE channel_name = $1 AND thread_id = $2
            ",
        )
        .bind(thread.channel.as_str())
        .bind(thread.thread_id)
        .bind(&thread.name)
        .bind(&thread.description)
        .bind(&thread.owner)
        .bind(thread.pinned)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(&thread.key()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_cascade(&self, key: &ThreadKey) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM favorites WHERE channel_name = $1 AND thread_id = $2
            ",
        )
        .bind(key.channel.as_str())
        .bind(key.thread_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM comments WHERE channel_name = $1 AND thread_id = $2
            ",
        )
        .bind(key.channel.as_str())
        .bind(key.thread_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM threads WHERE channel_name = $1 AND thread_id = $2
            ",
        )
        .bind(key.channel.as_str())
        .bind(key.thread_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(key));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_owner(&self, username: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE threads SET owner = NULL WHERE owner = $1
            ",
        )
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgThreadRepository>();
    }
}
