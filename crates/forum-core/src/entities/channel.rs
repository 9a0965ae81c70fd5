//! Channel entity - top-level topic board

use chrono::{DateTime, Utc};

use crate::value_objects::ChannelName;

/// Channel entity keyed by its globally unique name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: ChannelName,
    pub description: String,
    /// Owner username. None when the owner's account was deleted and no
    /// moderator could take over before the cascade removed the channel.
    pub owner: Option<String>,
    /// Moderator usernames in appointment order. Order matters: the first
    /// surviving moderator inherits the channel when the owner is deleted.
    pub moderators: Vec<String>,
    /// Usernames banned from posting in this channel
    pub banned: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Bumped whenever a thread or comment is posted in the channel
    pub recent_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new Channel owned by the given user
    pub fn new(name: ChannelName, description: String, owner: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            description,
            owner: Some(owner),
            moderators: Vec::new(),
            banned: Vec::new(),
            created_at: now,
            recent_at: now,
        }
    }

    /// Check if a user owns the channel
    #[inline]
    pub fn is_owner(&self, username: &str) -> bool {
        self.owner.as_deref() == Some(username)
    }

    /// Check if a user moderates the channel
    #[inline]
    pub fn is_moderator(&self, username: &str) -> bool {
        self.moderators.iter().any(|m| m == username)
    }

    /// Check if a user is banned from the channel
    #[inline]
    pub fn is_banned(&self, username: &str) -> bool {
        self.banned.iter().any(|b| b == username)
    }

    /// Appoint a moderator. No-op if already appointed.
    pub fn add_moderator(&mut self, username: String) {
        if !self.is_moderator(&username) {
            self.moderators.push(username);
        }
    }

    /// Remove a moderator
    pub fn remove_moderator(&mut self, username: &str) {
        self.moderators.retain(|m| m != username);
    }

    /// Ban a user from the channel. No-op if already banned.
    pub fn ban(&mut self, username: String) {
        if !self.is_banned(&username) {
            self.banned.push(username);
        }
    }

    /// Lift a ban
    pub fn unban(&mut self, username: &str) {
        self.banned.retain(|b| b != username);
    }

    /// Transfer ownership to another user
    pub fn transfer_ownership(&mut self, new_owner: String) {
        self.remove_moderator(&new_owner);
        self.owner = Some(new_owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> Channel {
        Channel::new(
            ChannelName::parse("rust-help").unwrap(),
            "Get help with Rust".to_string(),
            "alice".to_string(),
        )
    }

    #[test]
    fn test_ownership() {
        let chan = channel();
        assert!(chan.is_owner("alice"));
        assert!(!chan.is_owner("bob"));
    }

    #[test]
    fn test_moderators_keep_order() {
        let mut chan = channel();
        chan.add_moderator("bob".to_string());
        chan.add_moderator("carol".to_string());
        chan.add_moderator("bob".to_string());
        assert_eq!(chan.moderators, vec!["bob", "carol"]);

        chan.remove_moderator("bob");
        assert_eq!(chan.moderators, vec!["carol"]);
    }

    #[test]
    fn test_ban_and_unban() {
        let mut chan = channel();
        chan.ban("mallory".to_string());
        chan.ban("mallory".to_string());
        assert!(chan.is_banned("mallory"));
        assert_eq!(chan.banned.len(), 1);

        chan.unban("mallory");
        assert!(!chan.is_banned("mallory"));
    }

    #[test]
    fn test_transfer_ownership_drops_moderator_entry() {
        let mut chan = channel();
        chan.add_moderator("bob".to_string());
        chan.transfer_ownership("bob".to_string());
        assert!(chan.is_owner("bob"));
        assert!(!chan.is_moderator("bob"));
    }
}
