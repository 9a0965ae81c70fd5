//! PostgreSQL implementation of ChannelRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Channel;
use forum_core::error::DomainError;
use forum_core::traits::{ChannelRepository, RepoResult};
use forum_core::value_objects::ChannelName;

use crate::mappers::channel_from_model;
use crate::models::ChannelModel;

use super::error::{channel_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of ChannelRepository
#[derive(Clone)]
pub struct PgChannelRepository {
    pool: PgPool,
}

impl PgChannelRepository {
    /// Create a new PgChannelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for PgChannelRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &ChannelName) -> RepoResult<Option<Channel>> {
        let result = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT channel_name, description, owner, moderators, banned, created_at, recent_at
            FROM channels
            WHERE channel_name = $1
            ",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(channel_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT channel_name, description, owner, moderators, banned, created_at, recent_at
            FROM channels
            ORDER BY recent_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(channel_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn list_owned_by(&self, username: &str) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT channel_name, description, owner, moderators, banned, created_at, recent_at
            FROM channels
            WHERE owner = $1
            ORDER BY created_at
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(channel_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, channel: &Channel) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO channels (channel_name, description, owner, moderators, banned, created_at, recent_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(channel.name.as_str())
        .bind(&channel.description)
        .bind(&channel.owner)
        .bind(Json(&channel.moderators))
        .bind(Json(&channel.banned))
        .bind(channel.created_at)
        .bind(channel.recent_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ChannelNameTaken(channel.name.to_string())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, channel: &Channel) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE channels
            SET description = $2, owner = $3, moderators = $4, banned = $5
            WHERE channel_name = $1
            ",
        )
        .bind(channel.name.as_str())
        .bind(&channel.description)
        .bind(&channel.owner)
        .bind(Json(&channel.moderators))
        .bind(Json(&channel.banned))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(channel_not_found(channel.name.as_str()));
        }

        Ok(())
    }

    /// Child rows go first so the delete never leaves a half-emptied
    /// channel visible: the whole subtree disappears in one transaction.
    #[instrument(skip(self))]
    async fn delete_cascade(&self, name: &ChannelName) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM favorites WHERE channel_name = $1
            ",
        )
        .bind(name.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM comments WHERE channel_name = $1
            ",
        )
        .bind(name.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM threads WHERE channel_name = $1
            ",
        )
        .bind(name.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM channels WHERE channel_name = $1
            ",
        )
        .bind(name.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(channel_not_found(name.as_str()));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgChannelRepository>();
    }
}
