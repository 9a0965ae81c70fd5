//! Thread service
//!
//! Handles thread creation, pinning, deletion, and queries.

use forum_core::entities::{NewThread, Thread};
use forum_core::{ChannelName, DomainError, Permissions, ThreadKey};
use tracing::{info, instrument};

use crate::dto::mappers::ThreadWithCount;
use crate::dto::{CreateThreadRequest, ThreadDetailResponse, ThreadResponse, UpdateThreadRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new thread in a channel
    ///
    /// The thread id is allocated inside the insert, so the caller learns it
    /// from the returned response.
    #[instrument(skip(self, request))]
    pub async fn create_thread(
        &self,
        actor: &str,
        channel_name: &ChannelName,
        request: CreateThreadRequest,
    ) -> ServiceResult<ThreadResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;

        let channel = self
            .ctx
            .channel_repo()
            .find_by_name(channel_name)
            .await?
            .ok_or_else(|| DomainError::ChannelNotFound(channel_name.to_string()))?;

        permission_service.require_permission(&channel, &user, Permissions::CREATE_THREAD)?;

        let new_thread = NewThread {
            channel: channel_name.clone(),
            name: request.name,
            description: request.description,
            owner: user.username,
        };
        let thread = self.ctx.thread_repo().create(&new_thread).await?;

        info!(thread = %thread.key(), owner = %actor, "Thread created");

        Ok(ThreadResponse::from(&thread))
    }

    /// Get thread by key, with its comment count
    #[instrument(skip(self))]
    pub async fn get_thread(&self, key: &ThreadKey) -> ServiceResult<ThreadDetailResponse> {
        let thread = self.get_thread_entity(key).await?;
        let comment_count = self.ctx.comment_repo().count_by_thread(key).await?;

        Ok(ThreadDetailResponse::from(ThreadWithCount {
            thread,
            comment_count,
        }))
    }

    /// List threads in a channel, pinned first then most recently active
    #[instrument(skip(self))]
    pub async fn list_threads(
        &self,
        channel_name: &ChannelName,
    ) -> ServiceResult<Vec<ThreadResponse>> {
        // Listing an unknown channel is a 404, not an empty list
        if self
            .ctx
            .channel_repo()
            .find_by_name(channel_name)
            .await?
            .is_none()
        {
            return Err(DomainError::ChannelNotFound(channel_name.to_string()).into());
        }

        let threads = self.ctx.thread_repo().find_by_channel(channel_name).await?;
        Ok(threads.iter().map(ThreadResponse::from).collect())
    }

    /// Update a thread's name or description
    ///
    /// Only the author (or staff) may edit a thread.
    #[instrument(skip(self, request))]
    pub async fn update_thread(
        &self,
        actor: &str,
        key: &ThreadKey,
        request: UpdateThreadRequest,
    ) -> ServiceResult<ThreadResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let mut thread = self.get_thread_entity(key).await?;

        if !thread.is_owner(&user.username) && !user.is_staff {
            return Err(DomainError::NotAuthor.into());
        }

        let mut changed = false;

        if let Some(name) = request.name {
            thread.name = name;
            changed = true;
        }
        if let Some(description) = request.description {
            thread.description = description;
            changed = true;
        }

        if changed {
            self.ctx.thread_repo().update(&thread).await?;
        }

        Ok(ThreadResponse::from(&thread))
    }

    /// Pin or unpin a thread
    #[instrument(skip(self))]
    pub async fn set_pinned(
        &self,
        actor: &str,
        key: &ThreadKey,
        pinned: bool,
    ) -> ServiceResult<ThreadResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let mut thread = self.get_thread_entity(key).await?;

        let channel = self
            .ctx
            .channel_repo()
            .find_by_name(&key.channel)
            .await?
            .ok_or_else(|| DomainError::ChannelNotFound(key.channel.to_string()))?;

        permission_service.require_permission(&channel, &user, Permissions::PIN_THREAD)?;

        thread.set_pinned(pinned);
        self.ctx.thread_repo().update(&thread).await?;

        info!(thread = %key, pinned = pinned, "Thread pin state changed");

        Ok(ThreadResponse::from(&thread))
    }

    /// Delete a thread and every comment and favorite underneath it
    ///
    /// The author may always delete their own thread; anyone else needs the
    /// DELETE_THREAD permission in the channel.
    #[instrument(skip(self))]
    pub async fn delete_thread(&self, actor: &str, key: &ThreadKey) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let thread = self.get_thread_entity(key).await?;

        if !thread.is_owner(&user.username) {
            let channel = self
                .ctx
                .channel_repo()
                .find_by_name(&key.channel)
                .await?
                .ok_or_else(|| DomainError::ChannelNotFound(key.channel.to_string()))?;

            permission_service.require_permission(&channel, &user, Permissions::DELETE_THREAD)?;
        }

        self.ctx.thread_repo().delete_cascade(key).await?;

        info!(thread = %key, actor = %actor, "Thread deleted");

        Ok(())
    }

    /// Get thread entity by key
    pub(crate) async fn get_thread_entity(&self, key: &ThreadKey) -> ServiceResult<Thread> {
        self.ctx
            .thread_repo()
            .find(key)
            .await?
            .ok_or_else(|| DomainError::ThreadNotFound(key.clone()).into())
    }
}

#[cfg(test)]
mod tests {
    // Covered by the repository integration tests and the API smoke tests.
}
