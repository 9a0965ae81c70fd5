//! Channel service
//!
//! Handles channel creation, management, moderation, and queries.

use forum_core::entities::Channel;
use forum_core::{ChannelName, DomainError, Permissions};
use tracing::{info, instrument};

use crate::dto::{ChannelResponse, CreateChannelRequest, UpdateChannelRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new channel owned by the acting user
    #[instrument(skip(self, request))]
    pub async fn create_channel(
        &self,
        actor: &str,
        request: CreateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;

        let name = ChannelName::parse(&request.name)
            .map_err(|e| DomainError::InvalidChannelName(e.to_string()))?;

        let channel = Channel::new(name, request.description, user.username);
        self.ctx.channel_repo().create(&channel).await?;

        info!(channel = %channel.name, owner = %actor, "Channel created");

        Ok(ChannelResponse::from(&channel))
    }

    /// Get channel by name
    #[instrument(skip(self))]
    pub async fn get_channel(&self, name: &ChannelName) -> ServiceResult<ChannelResponse> {
        let channel = self.get_channel_entity(name).await?;
        Ok(ChannelResponse::from(&channel))
    }

    /// List all channels, most recently active first
    #[instrument(skip(self))]
    pub async fn list_channels(&self) -> ServiceResult<Vec<ChannelResponse>> {
        let channels = self.ctx.channel_repo().list().await?;
        Ok(channels.iter().map(ChannelResponse::from).collect())
    }

    /// Update channel settings
    #[instrument(skip(self, request))]
    pub async fn update_channel(
        &self,
        actor: &str,
        name: &ChannelName,
        request: UpdateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let mut channel = self.get_channel_entity(name).await?;

        permission_service.require_permission(&channel, &user, Permissions::MANAGE_CHANNEL)?;

        let mut changed = false;

        if let Some(description) = request.description {
            channel.description = description;
            changed = true;
        }

        // Transfer ownership
        if let Some(new_owner) = request.owner {
            // Only the current owner or staff may hand the channel over
            if !channel.is_owner(&user.username) && !user.is_staff {
                return Err(DomainError::NotChannelOwner.into());
            }

            if !self.ctx.user_repo().username_exists(&new_owner).await? {
                return Err(DomainError::UserNotFound(new_owner).into());
            }

            info!(channel = %channel.name, old_owner = ?channel.owner, new_owner = %new_owner, "Channel ownership transferred");
            channel.transfer_ownership(new_owner);
            changed = true;
        }

        if changed {
            self.ctx.channel_repo().update(&channel).await?;
        }

        Ok(ChannelResponse::from(&channel))
    }

    /// Delete a channel and everything underneath it
    #[instrument(skip(self))]
    pub async fn delete_channel(&self, actor: &str, name: &ChannelName) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let channel = self.get_channel_entity(name).await?;

        permission_service.require_permission(&channel, &user, Permissions::MANAGE_CHANNEL)?;

        self.ctx.channel_repo().delete_cascade(name).await?;

        info!(channel = %name, actor = %actor, "Channel deleted");

        Ok(())
    }

    // === Moderators ===

    /// Appoint a moderator
    #[instrument(skip(self))]
    pub async fn add_moderator(
        &self,
        actor: &str,
        name: &ChannelName,
        username: &str,
    ) -> ServiceResult<ChannelResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let mut channel = self.get_channel_entity(name).await?;

        permission_service.require_permission(&channel, &user, Permissions::MANAGE_MODERATORS)?;

        if channel.is_owner(username) {
            return Err(DomainError::CannotModerateOwner.into());
        }
        if channel.is_moderator(username) {
            return Err(DomainError::AlreadyModerator.into());
        }
        if !self.ctx.user_repo().username_exists(username).await? {
            return Err(DomainError::UserNotFound(username.to_string()).into());
        }

        channel.add_moderator(username.to_string());
        self.ctx.channel_repo().update(&channel).await?;

        info!(channel = %name, moderator = %username, "Moderator appointed");

        Ok(ChannelResponse::from(&channel))
    }

    /// Remove a moderator
    #[instrument(skip(self))]
    pub async fn remove_moderator(
        &self,
        actor: &str,
        name: &ChannelName,
        username: &str,
    ) -> ServiceResult<ChannelResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let mut channel = self.get_channel_entity(name).await?;

        permission_service.require_permission(&channel, &user, Permissions::MANAGE_MODERATORS)?;

        if !channel.is_moderator(username) {
            return Err(ServiceError::not_found("Moderator", username));
        }

        channel.remove_moderator(username);
        self.ctx.channel_repo().update(&channel).await?;

        info!(channel = %name, moderator = %username, "Moderator removed");

        Ok(ChannelResponse::from(&channel))
    }

    // === Bans ===

    /// Ban a user from the channel
    #[instrument(skip(self))]
    pub async fn ban_user(
        &self,
        actor: &str,
        name: &ChannelName,
        username: &str,
    ) -> ServiceResult<ChannelResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let mut channel = self.get_channel_entity(name).await?;

        permission_service.require_permission(&channel, &user, Permissions::BAN_MEMBERS)?;

        if channel.is_owner(username) {
            return Err(DomainError::CannotBanOwner.into());
        }
        if channel.is_banned(username) {
            return Err(ServiceError::conflict(format!(
                "{username} is already banned from {name}"
            )));
        }
        if !self.ctx.user_repo().username_exists(username).await? {
            return Err(DomainError::UserNotFound(username.to_string()).into());
        }

        channel.ban(username.to_string());
        self.ctx.channel_repo().update(&channel).await?;

        info!(channel = %name, banned = %username, "User banned from channel");

        Ok(ChannelResponse::from(&channel))
    }

    /// Lift a channel ban
    #[instrument(skip(self))]
    pub async fn unban_user(
        &self,
        actor: &str,
        name: &ChannelName,
        username: &str,
    ) -> ServiceResult<ChannelResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let user = permission_service.load_actor(actor).await?;
        let mut channel = self.get_channel_entity(name).await?;

        permission_service.require_permission(&channel, &user, Permissions::BAN_MEMBERS)?;

        if !channel.is_banned(username) {
            return Err(ServiceError::not_found("Ban", username));
        }

        channel.unban(username);
        self.ctx.channel_repo().update(&channel).await?;

        info!(channel = %name, unbanned = %username, "Channel ban lifted");

        Ok(ChannelResponse::from(&channel))
    }

    /// Get channel entity by name
    pub(crate) async fn get_channel_entity(&self, name: &ChannelName) -> ServiceResult<Channel> {
        self.ctx
            .channel_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::ChannelNotFound(name.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    // Covered by the repository integration tests and the API smoke tests.
}
