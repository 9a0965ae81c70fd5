//! Permission service
//!
//! Handles permission checking and computation for channel members.

use forum_core::entities::{Channel, User};
use forum_core::{ChannelName, DomainError, Permissions};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load an actor by username, rejecting deactivated accounts
    #[instrument(skip(self))]
    pub async fn load_actor(&self, username: &str) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;

        if !user.is_active {
            return Err(DomainError::AccountDeactivated.into());
        }

        Ok(user)
    }

    /// Compute a user's permissions within a channel
    ///
    /// Staff and the channel owner hold every permission. Banned members
    /// hold none. Moderators get the moderator set, everyone else the
    /// member set.
    pub fn channel_permissions(&self, channel: &Channel, user: &User) -> Permissions {
        if user.is_staff || channel.is_owner(&user.username) {
            return Permissions::ALL;
        }

        if channel.is_banned(&user.username) {
            return Permissions::empty();
        }

        if channel.is_moderator(&user.username) {
            Permissions::MODERATOR
        } else {
            Permissions::MEMBER
        }
    }

    /// Check if a user has a specific permission in a channel
    pub fn check_permission(
        &self,
        channel: &Channel,
        user: &User,
        permission: Permissions,
    ) -> bool {
        self.channel_permissions(channel, user).has(permission)
    }

    /// Check permission and return error if denied
    pub fn require_permission(
        &self,
        channel: &Channel,
        user: &User,
        permission: Permissions,
    ) -> ServiceResult<()> {
        if !self.check_permission(channel, user, permission) {
            let perm_names = permission.list().join(", ");
            debug!(
                username = %user.username,
                channel = %channel.name,
                permission = %perm_names,
                "Permission denied"
            );
            return Err(ServiceError::permission_denied(perm_names));
        }
        Ok(())
    }

    /// Load a channel and compute the actor's permissions in it
    #[instrument(skip(self))]
    pub async fn get_channel_permissions(
        &self,
        channel_name: &ChannelName,
        username: &str,
    ) -> ServiceResult<Permissions> {
        let channel = self
            .ctx
            .channel_repo()
            .find_by_name(channel_name)
            .await?
            .ok_or_else(|| DomainError::ChannelNotFound(channel_name.to_string()))?;

        let user = self.load_actor(username).await?;

        Ok(self.channel_permissions(&channel, &user))
    }

    /// Require site-wide staff status
    pub fn require_staff(&self, user: &User) -> ServiceResult<()> {
        if !user.is_staff {
            return Err(ServiceError::permission_denied("STAFF"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use forum_core::Permissions;

    #[test]
    fn test_permission_flags() {
        let perms = Permissions::CREATE_THREAD | Permissions::CREATE_COMMENT;
        assert!(perms.has(Permissions::CREATE_THREAD));
        assert!(perms.has(Permissions::CREATE_COMMENT));
        assert!(!perms.has(Permissions::MANAGE_CHANNEL));
    }

    #[test]
    fn test_moderator_set_includes_member_set() {
        assert!(Permissions::MODERATOR.has(Permissions::MEMBER));
        assert!(Permissions::MODERATOR.has(Permissions::DELETE_COMMENT));
        assert!(!Permissions::MODERATOR.has(Permissions::MANAGE_CHANNEL));
    }

    #[test]
    fn test_all_covers_everything() {
        assert!(Permissions::ALL.has(Permissions::MANAGE_MODERATORS));
        assert!(Permissions::ALL.has(Permissions::BAN_MEMBERS));
        assert!(Permissions::ALL.has(Permissions::PIN_THREAD));
    }
}
