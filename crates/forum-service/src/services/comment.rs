//! Comment service
//!
//! Handles posting, listing, and deleting comments.

use forum_core::entities::NewComment;
use forum_core::{CommentKey, DomainError, Permissions, ThreadKey};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a comment in a thread
    ///
    /// The comment id is allocated inside the insert. Posting bumps both the
    /// thread's and the channel's activity timestamps.
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        actor: &str,
        thread_key: &ThreadKey,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;

        // The thread must exist before we touch permissions
        if self.ctx.thread_repo().find(thread_key).await?.is_none() {
            return Err(DomainError::ThreadNotFound(thread_key.clone()).into());
        }

        let channel = self
            .ctx
            .channel_repo()
            .find_by_name(&thread_key.channel)
            .await?
            .ok_or_else(|| DomainError::ChannelNotFound(thread_key.channel.to_string()))?;

        permission_service.require_permission(&channel, &user, Permissions::CREATE_COMMENT)?;

        let new_comment = NewComment {
            thread: thread_key.clone(),
            text: request.text,
            owner: user.username,
        };
        let comment = self.ctx.comment_repo().create(&new_comment).await?;

        info!(comment = %comment.key(), owner = %actor, "Comment posted");

        Ok(CommentResponse::from(&comment))
    }

    /// List comments in a thread, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, thread_key: &ThreadKey) -> ServiceResult<Vec<CommentResponse>> {
        if self.ctx.thread_repo().find(thread_key).await?.is_none() {
            return Err(DomainError::ThreadNotFound(thread_key.clone()).into());
        }

        let comments = self.ctx.comment_repo().find_by_thread(thread_key).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Delete a single comment
    ///
    /// The author may always delete their own comment; anyone else needs the
    /// DELETE_COMMENT permission in the channel.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, actor: &str, key: &CommentKey) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find(key)
            .await?
            .ok_or_else(|| DomainError::CommentNotFound(key.clone()))?;

        if !comment.is_owner(&user.username) {
            let channel = self
                .ctx
                .channel_repo()
                .find_by_name(&key.thread.channel)
                .await?
                .ok_or_else(|| DomainError::ChannelNotFound(key.thread.channel.to_string()))?;

            permission_service.require_permission(&channel, &user, Permissions::DELETE_COMMENT)?;
        }

        self.ctx.comment_repo().delete(key).await?;

        info!(comment = %key, actor = %actor, "Comment deleted");

        Ok(())
    }
}
