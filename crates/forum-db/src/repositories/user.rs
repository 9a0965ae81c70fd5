//! PostgreSQL implementation of UserRepository
//!
//! User deletion is the most involved write in the system: every channel the
//! user owns must be handed to a surviving moderator or cascade-deleted, and
//! their remaining content orphaned, all before the user row itself can go.
//! The whole teardown runs in one transaction so a failure partway leaves
//! nothing half-deleted.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{instrument, warn};

use forum_core::cascade::{ChannelSuccession, SuccessionDecision, UserDeletionOutcome};
use forum_core::entities::User;
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, UserRepository};

use crate::mappers::channel_from_model;
use crate::models::{ChannelModel, UserModel};

use super::error::{
    is_foreign_key_violation, is_unique_violation, map_db_error, map_unique_violation,
    user_not_found, ALLOC_RETRIES,
};

/// Why one attempt at the deletion transaction failed
enum TxFailure {
    /// A concurrent writer invalidated a succession decision. The whole
    /// transaction is re-run against fresh state.
    Conflict,
    Fatal(DomainError),
}

fn tx_err(e: sqlx::Error) -> TxFailure {
    if is_foreign_key_violation(&e) || is_unique_violation(&e) {
        TxFailure::Conflict
    } else {
        TxFailure::Fatal(map_db_error(e))
    }
}

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn try_delete_with_succession(
        &self,
        username: &str,
    ) -> Result<UserDeletionOutcome, TxFailure> {
        let mut tx = self.pool.begin().await.map_err(tx_err)?;

        // Lock the user row so two deletions of the same account serialize
        let locked = sqlx::query_scalar::<_, String>(
            r"
            SELECT username FROM users WHERE username = $1 FOR UPDATE
            ",
        )
        .bind(username)
        .fetch_optional(&mut *tx)
        .await
        .map_err(tx_err)?;

        if locked.is_none() {
            return Err(TxFailure::Fatal(user_not_found(username)));
        }

        let owned = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT channel_name, description, owner, moderators, banned, created_at, recent_at
            FROM channels
            WHERE owner = $1
            ORDER BY created_at
            FOR UPDATE
            ",
        )
        .bind(username)
        .fetch_all(&mut *tx)
        .await
        .map_err(tx_err)?;

        // Which moderators still have accounts, checked inside the
        // transaction. FOR KEY SHARE pins the successor rows so they cannot
        // be deleted out from under the reassignment before we commit.
        let mut candidates: Vec<String> = Vec::new();
        for model in &owned {
            for moderator in model.moderators.iter() {
                if moderator != username && !candidates.contains(moderator) {
                    candidates.push(moderator.clone());
                }
            }
        }
        let surviving: HashSet<String> = if candidates.is_empty() {
            HashSet::new()
        } else {
            sqlx::query_scalar::<_, String>(
                r"
                SELECT username FROM users WHERE username = ANY($1) FOR KEY SHARE
                ",
            )
            .bind(&candidates)
            .fetch_all(&mut *tx)
            .await
            .map_err(tx_err)?
            .into_iter()
            .collect()
        };

        let mut reassigned = Vec::new();
        let mut deleted_channels = Vec::new();

        for model in owned {
            let mut channel = channel_from_model(model).map_err(TxFailure::Fatal)?;
            match SuccessionDecision::decide(&channel, username, |m| surviving.contains(m)) {
                SuccessionDecision::Reassign(new_owner) => {
                    channel.transfer_ownership(new_owner.clone());
                    sqlx::query(
                        r"
                        UPDATE channels SET owner = $2, moderators = $3 WHERE channel_name = $1
                        ",
                    )
                    .bind(channel.name.as_str())
                    .bind(&channel.owner)
                    .bind(Json(&channel.moderators))
                    .execute(&mut *tx)
                    .await
                    .map_err(tx_err)?;
                    reassigned.push(ChannelSuccession {
                        channel: channel.name.to_string(),
                        new_owner,
                    });
                }
                SuccessionDecision::DeleteCascade => {
                    // Child rows first, same order as a plain channel delete
                    for statement in [
                        "DELETE FROM favorites WHERE channel_name = $1",
                        "DELETE FROM comments WHERE channel_name = $1",
                        "DELETE FROM threads WHERE channel_name = $1",
                        "DELETE FROM channels WHERE channel_name = $1",
                    ] {
                        sqlx::query(statement)
                            .bind(channel.name.as_str())
                            .execute(&mut *tx)
                            .await
                            .map_err(tx_err)?;
                    }
                    deleted_channels.push(channel.name.to_string());
                }
            }
        }

        let orphaned_threads = sqlx::query(
            r"
            UPDATE threads SET owner = NULL WHERE owner = $1
            ",
        )
        .bind(username)
        .execute(&mut *tx)
        .await
        .map_err(tx_err)?
        .rows_affected();

        let orphaned_comments = sqlx::query(
            r"
            UPDATE comments SET owner = NULL WHERE owner = $1
            ",
        )
        .bind(username)
        .execute(&mut *tx)
        .await
        .map_err(tx_err)?
        .rows_affected();

        sqlx::query(
            r"
            DELETE FROM favorites WHERE username = $1
            ",
        )
        .bind(username)
        .execute(&mut *tx)
        .await
        .map_err(tx_err)?;

        sqlx::query(
            r"
            DELETE FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .execute(&mut *tx)
        .await
        .map_err(tx_err)?;

        tx.commit().await.map_err(tx_err)?;

        Ok(UserDeletionOutcome {
            reassigned,
            deleted_channels,
            orphaned_threads,
            orphaned_comments,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT username, email, display_name, is_active, is_staff, created_at, updated_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT username, email, display_name, is_active, is_staff, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (username, email, display_name, is_active, is_staff, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::UsernameTaken(user.username.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET email = $2, display_name = $3, is_active = $4, is_staff = $5, updated_at = NOW()
            WHERE username = $1
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(user.is_active)
        .bind(user.is_staff)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(&user.username));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, username: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(username));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_with_succession(&self, username: &str) -> RepoResult<UserDeletionOutcome> {
        // A constraint violation means a concurrent writer changed the
        // channels or users we based a succession decision on. The next
        // attempt re-reads and decides against the new state.
        for attempt in 1..=ALLOC_RETRIES {
            match self.try_delete_with_succession(username).await {
                Ok(outcome) => return Ok(outcome),
                Err(TxFailure::Conflict) => {
                    warn!(username, attempt, "user deletion raced a concurrent write, retrying");
                }
                Err(TxFailure::Fatal(e)) => return Err(e),
            }
        }

        Err(DomainError::DatabaseError(format!(
            "deletion of user {username} kept conflicting with concurrent writes"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
