//! Owner succession - what happens to a channel when its owner is deleted
//!
//! Deleting a user orphans their threads and comments (owner set to null),
//! but a channel cannot live without an owner. Each channel the user owns is
//! either handed to a moderator or cascade-deleted, decided here as a pure
//! function so the rule is testable without a database.

use crate::entities::Channel;

/// Outcome for one channel owned by a user being deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessionDecision {
    /// Hand the channel to this moderator
    Reassign(String),
    /// No eligible moderator: delete the channel and everything under it
    DeleteCascade,
}

impl SuccessionDecision {
    /// Decide succession for a channel whose owner is being deleted.
    ///
    /// Moderators are considered in appointment order. A moderator is
    /// eligible if `exists` says their account is still present and they are
    /// not the user being deleted.
    pub fn decide<F>(channel: &Channel, deleted_user: &str, exists: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        channel
            .moderators
            .iter()
            .find(|m| m.as_str() != deleted_user && exists(m))
            .map(|m| Self::Reassign(m.clone()))
            .unwrap_or(Self::DeleteCascade)
    }
}

/// A channel handed to a new owner during user deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSuccession {
    pub channel: String,
    pub new_owner: String,
}

/// What deleting a user did to the rest of the forum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDeletionOutcome {
    /// Channels handed to a surviving moderator, in creation order
    pub reassigned: Vec<ChannelSuccession>,
    /// Channels removed because no successor existed
    pub deleted_channels: Vec<String>,
    /// Threads whose author was nulled out
    pub orphaned_threads: u64,
    /// Comments whose author was nulled out
    pub orphaned_comments: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ChannelName;

    fn channel_with_mods(mods: &[&str]) -> Channel {
        let mut chan = Channel::new(
            ChannelName::parse("general").unwrap(),
            "General discussion".to_string(),
            "alice".to_string(),
        );
        for m in mods {
            chan.add_moderator((*m).to_string());
        }
        chan
    }

    #[test]
    fn test_first_surviving_moderator_inherits() {
        let chan = channel_with_mods(&["bob", "carol"]);
        let decision = SuccessionDecision::decide(&chan, "alice", |_| true);
        assert_eq!(decision, SuccessionDecision::Reassign("bob".to_string()));
    }

    #[test]
    fn test_skips_moderators_whose_accounts_are_gone() {
        let chan = channel_with_mods(&["bob", "carol"]);
        let decision = SuccessionDecision::decide(&chan, "alice", |m| m == "carol");
        assert_eq!(decision, SuccessionDecision::Reassign("carol".to_string()));
    }

    #[test]
    fn test_no_moderators_means_cascade() {
        let chan = channel_with_mods(&[]);
        let decision = SuccessionDecision::decide(&chan, "alice", |_| true);
        assert_eq!(decision, SuccessionDecision::DeleteCascade);
    }

    #[test]
    fn test_all_moderators_gone_means_cascade() {
        let chan = channel_with_mods(&["bob"]);
        let decision = SuccessionDecision::decide(&chan, "alice", |_| false);
        assert_eq!(decision, SuccessionDecision::DeleteCascade);
    }

    #[test]
    fn test_deleted_user_is_never_a_candidate() {
        // An owner who also appears in their own moderator list must not
        // inherit the channel from themselves.
        let chan = channel_with_mods(&["alice", "bob"]);
        let decision = SuccessionDecision::decide(&chan, "alice", |_| true);
        assert_eq!(decision, SuccessionDecision::Reassign("bob".to_string()));
    }
}
