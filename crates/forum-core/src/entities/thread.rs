//! Thread entity - a topic of discussion inside a channel

use chrono::{DateTime, Utc};

use crate::value_objects::{ChannelName, ThreadKey};

/// Thread entity, numbered per channel starting at 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub channel: ChannelName,
    pub thread_id: i64,
    pub name: String,
    pub description: String,
    /// Author username. None when the author's account was deleted.
    pub owner: Option<String>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    /// Bumped whenever a comment is posted in the thread
    pub recent_at: DateTime<Utc>,
}

impl Thread {
    /// Create a new Thread with an already-allocated id
    pub fn new(
        channel: ChannelName,
        thread_id: i64,
        name: String,
        description: String,
        owner: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            channel,
            thread_id,
            name,
            description,
            owner: Some(owner),
            pinned: false,
            created_at: now,
            recent_at: now,
        }
    }

    /// Full key for this thread
    pub fn key(&self) -> ThreadKey {
        ThreadKey::new(self.channel.clone(), self.thread_id)
    }

    /// Check if a user authored the thread
    #[inline]
    pub fn is_owner(&self, username: &str) -> bool {
        self.owner.as_deref() == Some(username)
    }

    /// Pin or unpin the thread
    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }
}

/// Data needed to create a thread. The thread id is allocated at insert time.
#[derive(Debug, Clone)]
pub struct NewThread {
    pub channel: ChannelName,
    pub name: String,
    pub description: String,
    pub owner: String,
}
