//! Favorite service
//!
//! Handles a user's thread bookmarks.

use forum_core::entities::Favorite;
use forum_core::{DomainError, ThreadKey};
use tracing::{info, instrument};

use crate::dto::{FavoriteResponse, ThreadResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Bookmark a thread
    #[instrument(skip(self))]
    pub async fn add_favorite(
        &self,
        actor: &str,
        thread_key: &ThreadKey,
    ) -> ServiceResult<FavoriteResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;

        if self.ctx.thread_repo().find(thread_key).await?.is_none() {
            return Err(DomainError::ThreadNotFound(thread_key.clone()).into());
        }

        let favorite = Favorite::new(user.username, thread_key.clone());
        self.ctx.favorite_repo().create(&favorite).await?;

        info!(thread = %thread_key, username = %actor, "Thread favorited");

        Ok(FavoriteResponse::from(&favorite))
    }

    /// Remove a bookmark
    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, actor: &str, thread_key: &ThreadKey) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;

        self.ctx
            .favorite_repo()
            .delete(&user.username, thread_key)
            .await?;

        info!(thread = %thread_key, username = %actor, "Favorite removed");

        Ok(())
    }

    /// List the threads a user has bookmarked, most recently favorited first
    #[instrument(skip(self))]
    pub async fn list_favorites(&self, actor: &str) -> ServiceResult<Vec<ThreadResponse>> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;

        let favorites = self.ctx.favorite_repo().find_by_user(&user.username).await?;

        let mut threads = Vec::with_capacity(favorites.len());
        for favorite in &favorites {
            // Cascades keep favorites consistent with threads, but a row
            // racing a delete is not worth a 500 here
            if let Some(thread) = self.ctx.thread_repo().find(&favorite.thread).await? {
                threads.push(ThreadResponse::from(&thread));
            }
        }

        Ok(threads)
    }
}

#[cfg(test)]
mod tests {
    // Covered by the repository integration tests and the API smoke tests.
}
