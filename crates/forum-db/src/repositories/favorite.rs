//! PostgreSQL implementation of FavoriteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Favorite;
use forum_core::error::DomainError;
use forum_core::traits::{FavoriteRepository, RepoResult};
use forum_core::value_objects::ThreadKey;

use crate::mappers::favorite_from_model;
use crate::models::FavoriteModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    /// Create a new PgFavoriteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn find(&self, username: &str, thread: &ThreadKey) -> RepoResult<Option<Favorite>> {
        let result = sqlx::query_as::<_, FavoriteModel>(
            r"
            SELECT username, channel_name, thread_id, created_at
            FROM favorites
            WHERE username = $1 AND channel_name = $2 AND thread_id = $3
            ",
        )
        .bind(username)
        .bind(thread.channel.as_str())
        .bind(thread.thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(favorite_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, username: &str) -> RepoResult<Vec<Favorite>> {
        let results = sqlx::query_as::<_, FavoriteModel>(
            r"
            SELECT username, channel_name, thread_id, created_at
            FROM favorites
            WHERE username = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(favorite_from_model).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, favorite: &Favorite) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO favorites (username, channel_name, thread_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&favorite.username)
        .bind(favorite.thread.channel.as_str())
        .bind(favorite.thread.thread_id)
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFavorited))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, username: &str, thread: &ThreadKey) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM favorites
            WHERE username = $1 AND channel_name = $2 AND thread_id = $3
            ",
        )
        .bind(username)
        .bind(thread.channel.as_str())
        .bind(thread.thread_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FavoriteNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_user(&self, username: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM favorites WHERE username = $1
            ",
        )
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
