//! User service
//!
//! Handles account registration, profile management, site-wide moderation,
//! and account deletion with channel owner succession.

use forum_core::entities::User;
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    ChannelSuccessionResponse, CreateUserRequest, UpdateUserRequest, UserDeletionResponse,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        validate_username(&request.username)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(DomainError::UsernameTaken(request.username).into());
        }
        if self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let mut user = User::new(request.username, request.email);
        user.display_name = request.display_name;

        self.ctx.user_repo().create(&user).await?;

        info!(username = %user.username, "User registered");

        Ok(UserResponse::from(&user))
    }

    /// Get a user's profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(username).await?;
        Ok(UserResponse::from(&user))
    }

    /// Update a user's profile
    ///
    /// Users may edit their own profile; staff may edit anyone's.
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        actor: &str,
        username: &str,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let acting = permission_service.load_actor(actor).await?;

        if acting.username != username {
            permission_service.require_staff(&acting)?;
        }

        let mut user = self.get_user_entity(username).await?;
        let mut changed = false;

        if let Some(email) = request.email {
            user.email = email;
            changed = true;
        }
        if let Some(display_name) = request.display_name {
            user.set_display_name(Some(display_name));
            changed = true;
        }

        if changed {
            self.ctx.user_repo().update(&user).await?;
        }

        Ok(UserResponse::from(&user))
    }

    /// Deactivate an account site-wide (staff only)
    ///
    /// Deactivated accounts keep their content but can no longer act.
    #[instrument(skip(self))]
    pub async fn deactivate_user(&self, actor: &str, username: &str) -> ServiceResult<UserResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let acting = permission_service.load_actor(actor).await?;
        permission_service.require_staff(&acting)?;

        let mut user = self.get_user_entity(username).await?;
        user.deactivate();
        self.ctx.user_repo().update(&user).await?;

        info!(username = %username, actor = %actor, "Account deactivated");

        Ok(UserResponse::from(&user))
    }

    /// Reactivate an account (staff only)
    #[instrument(skip(self))]
    pub async fn activate_user(&self, actor: &str, username: &str) -> ServiceResult<UserResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let acting = permission_service.load_actor(actor).await?;
        permission_service.require_staff(&acting)?;

        let mut user = self.get_user_entity(username).await?;
        user.activate();
        self.ctx.user_repo().update(&user).await?;

        info!(username = %username, actor = %actor, "Account reactivated");

        Ok(UserResponse::from(&user))
    }

    /// Delete an account
    ///
    /// Users may delete themselves; staff may delete anyone. Every channel
    /// the user owns is handed to its senior surviving moderator or
    /// cascade-deleted, their remaining threads and comments are orphaned in
    /// place, and their favorites go with them. The repository runs the whole
    /// teardown in one transaction, so it either completes or leaves the
    /// account untouched.
    #[instrument(skip(self))]
    pub async fn delete_user(
        &self,
        actor: &str,
        username: &str,
    ) -> ServiceResult<UserDeletionResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let acting = permission_service.load_actor(actor).await?;

        if acting.username != username {
            permission_service.require_staff(&acting)?;
        }

        let outcome = self
            .ctx
            .user_repo()
            .delete_with_succession(username)
            .await?;

        info!(
            username = %username,
            reassigned = outcome.reassigned.len(),
            deleted = outcome.deleted_channels.len(),
            orphaned_threads = outcome.orphaned_threads,
            orphaned_comments = outcome.orphaned_comments,
            "User deleted"
        );

        Ok(UserDeletionResponse {
            username: username.to_string(),
            reassigned_channels: outcome
                .reassigned
                .into_iter()
                .map(|succession| ChannelSuccessionResponse {
                    channel: succession.channel,
                    new_owner: succession.new_owner,
                })
                .collect(),
            deleted_channels: outcome.deleted_channels,
            orphaned_threads: outcome.orphaned_threads,
            orphaned_comments: outcome.orphaned_comments,
        })
    }

    /// Get user entity by username
    pub(crate) async fn get_user_entity(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()).into())
    }
}

/// Usernames share the channel-name character set plus underscores, since
/// they appear in URL paths.
fn validate_username(username: &str) -> ServiceResult<()> {
    let valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(DomainError::InvalidUsername(username.to_string()).into());
    }
    Ok(())
}
