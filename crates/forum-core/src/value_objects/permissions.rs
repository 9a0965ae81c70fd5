//! Permission bitflags for channel-scoped access control
//!
//! A user's effective permissions in a channel are derived from their role:
//! staff and the channel owner hold every flag, moderators hold the
//! moderation flags, ordinary users hold the member flags, banned users
//! hold none.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Channel permission flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u32 {
        /// Create threads in the channel
        const CREATE_THREAD     = 1 << 0;
        /// Post comments in the channel's threads
        const CREATE_COMMENT    = 1 << 1;
        /// Delete other users' threads
        const DELETE_THREAD     = 1 << 2;
        /// Delete other users' comments
        const DELETE_COMMENT    = 1 << 3;
        /// Pin and unpin threads
        const PIN_THREAD        = 1 << 4;
        /// Add and remove channel moderators
        const MANAGE_MODERATORS = 1 << 5;
        /// Ban and unban users from the channel
        const BAN_MEMBERS       = 1 << 6;
        /// Edit or delete the channel itself
        const MANAGE_CHANNEL    = 1 << 7;

        /// Permissions held by any active, non-banned user
        const MEMBER = Self::CREATE_THREAD.bits() | Self::CREATE_COMMENT.bits();

        /// Permissions held by channel moderators
        const MODERATOR = Self::MEMBER.bits()
            | Self::DELETE_THREAD.bits()
            | Self::DELETE_COMMENT.bits()
            | Self::PIN_THREAD.bits();

        /// All permissions (channel owners and staff)
        const ALL = u32::MAX;
    }
}

impl Permissions {
    /// Check if the permission set contains a required permission
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        self.contains(permission)
    }

    /// Get the raw bits as i64 (for database storage)
    #[inline]
    pub fn to_i64(self) -> i64 {
        i64::from(self.bits())
    }

    /// Create from raw i64 bits (from database)
    #[inline]
    pub fn from_i64(bits: i64) -> Self {
        Permissions::from_bits_truncate(bits as u32)
    }

    /// Get a list of all individual permissions that are set
    pub fn list(&self) -> Vec<&'static str> {
        let mut result = Vec::new();
        if self.contains(Self::CREATE_THREAD) {
            result.push("CREATE_THREAD");
        }
        if self.contains(Self::CREATE_COMMENT) {
            result.push("CREATE_COMMENT");
        }
        if self.contains(Self::DELETE_THREAD) {
            result.push("DELETE_THREAD");
        }
        if self.contains(Self::DELETE_COMMENT) {
            result.push("DELETE_COMMENT");
        }
        if self.contains(Self::PIN_THREAD) {
            result.push("PIN_THREAD");
        }
        if self.contains(Self::MANAGE_MODERATORS) {
            result.push("MANAGE_MODERATORS");
        }
        if self.contains(Self::BAN_MEMBERS) {
            result.push("BAN_MEMBERS");
        }
        if self.contains(Self::MANAGE_CHANNEL) {
            result.push("MANAGE_CHANNEL");
        }
        result
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Permissions::empty()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Permissions::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_flags() {
        let perms = Permissions::MEMBER;
        assert!(perms.has(Permissions::CREATE_THREAD));
        assert!(perms.has(Permissions::CREATE_COMMENT));
        assert!(!perms.has(Permissions::DELETE_THREAD));
        assert!(!perms.has(Permissions::MANAGE_CHANNEL));
    }

    #[test]
    fn test_moderator_flags() {
        let perms = Permissions::MODERATOR;
        assert!(perms.has(Permissions::CREATE_THREAD));
        assert!(perms.has(Permissions::DELETE_THREAD));
        assert!(perms.has(Permissions::DELETE_COMMENT));
        assert!(perms.has(Permissions::PIN_THREAD));
        assert!(!perms.has(Permissions::MANAGE_MODERATORS));
        assert!(!perms.has(Permissions::BAN_MEMBERS));
    }

    #[test]
    fn test_all_contains_everything() {
        let perms = Permissions::ALL;
        assert!(perms.has(Permissions::MANAGE_CHANNEL));
        assert!(perms.has(Permissions::MODERATOR));
        assert!(perms.has(Permissions::BAN_MEMBERS));
    }

    #[test]
    fn test_list() {
        let perms = Permissions::CREATE_THREAD | Permissions::PIN_THREAD;
        assert_eq!(perms.list(), vec!["CREATE_THREAD", "PIN_THREAD"]);
        assert!(Permissions::empty().list().is_empty());
    }

    #[test]
    fn test_i64_round_trip() {
        let perms = Permissions::MODERATOR;
        assert_eq!(Permissions::from_i64(perms.to_i64()), perms);
    }
}
