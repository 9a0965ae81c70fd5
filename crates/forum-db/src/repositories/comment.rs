//! PostgreSQL implementation of CommentRepository
//!
//! Comment ids use the same allocate-inside-the-insert scheme as thread ids,
//! scoped to (channel_name, thread_id).

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use forum_core::entities::{Comment, NewComment};
use forum_core::error::DomainError;
use forum_core::traits::{CommentRepository, RepoResult};
use forum_core::value_objects::{CommentKey, ThreadKey};

use crate::mappers::comment_from_model;
use crate::models::CommentModel;

use super::error::{
    comment_not_found, is_foreign_key_violation, is_unique_violation, map_db_error,
    thread_not_found, ALLOC_RETRIES,
};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A comment counts as activity on its thread and channel, so both
    /// recent_at bumps commit together with the insert.
    async fn try_insert(&self, comment: &NewComment) -> Result<CommentModel, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (channel_name, thread_id, comment_id, text, owner, created_at)
            SELECT $1, $2, COALESCE(MAX(comment_id) + 1, 0), $3, $4, NOW()
            FROM comments
            WHERE channel_name = $1 AND thread_id = $2
            RETURNING channel_name, thread_id, comment_id, text, owner, created_at
            ",
        )
        .bind(comment.thread.channel.as_str())
        .bind(comment.thread.thread_id)
        .bind(&comment.text)
        .bind(&comment.owner)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r"
            UPDATE threads SET recent_at = NOW() WHERE channel_name = $1 AND thread_id = $2
            ",
        )
        .bind(comment.thread.channel.as_str())
        .bind(comment.thread.thread_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
            UPDATE channels SET recent_at = NOW() WHERE channel_name = $1
            ",
        )
        .bind(comment.thread.channel.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(model)
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find(&self, key: &CommentKey) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT channel_name, thread_id, comment_id, text, owner, created_at
            FROM comments
            WHERE channel_name = $1 AND thread_id = $2 AND comment_id = $3
            ",
        )
        .bind(key.thread.channel.as_str())
        .bind(key.thread.thread_id)
        .bind(key.comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(comment_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_thread(&self, thread: &ThreadKey) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT channel_name, thread_id, comment_id, text, owner, created_at
            FROM comments
            WHERE channel_name = $1 AND thread_id = $2
            ORDER BY comment_id
            ",
        )
        .bind(thread.channel.as_str())
        .bind(thread.thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(comment_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn count_by_thread(&self, thread: &ThreadKey) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM comments WHERE channel_name = $1 AND thread_id = $2
            ",
        )
        .bind(thread.channel.as_str())
        .bind(thread.thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        for attempt in 1..=ALLOC_RETRIES {
            match self.try_insert(comment).await {
                Ok(model) => return comment_from_model(model),
                Err(e) if is_unique_violation(&e) => {
                    warn!(
                        thread = %comment.thread,
                        attempt,
                        "comment id collision, retrying insert"
                    );
                }
                // The thread was deleted between the caller's checks and
                // the insert
                Err(e) if is_foreign_key_violation(&e) => {
                    return Err(thread_not_found(&comment.thread));
                }
                Err(e) => return Err(map_db_error(e)),
            }
        }

        Err(DomainError::SequenceConflict {
            attempts: ALLOC_RETRIES,
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &CommentKey) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM comments
            WHERE channel_name = $1 AND thread_id = $2 AND comment_id = $3
            ",
        )
        .bind(key.thread.channel.as_str())
        .bind(key.thread.thread_id)
        .bind(key.comment_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(key));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_owner(&self, username: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE comments SET owner = NULL WHERE owner = $1
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
        assert_send_sync::<PgCommentRepository>();
    }
}
