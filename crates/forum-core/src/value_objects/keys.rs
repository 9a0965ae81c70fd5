//! Composite keys for threads and comments
//!
//! Threads are numbered per channel and comments per thread, so neither has
//! a globally unique id of its own. These keys carry the full path.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ChannelName;

/// Key identifying a thread: channel name plus per-channel thread id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadKey {
    pub channel: ChannelName,
    pub thread_id: i64,
}

impl ThreadKey {
    /// Create a new ThreadKey
    pub fn new(channel: ChannelName, thread_id: i64) -> Self {
        Self { channel, thread_id }
    }

    /// Key for a comment in this thread
    pub fn comment(&self, comment_id: i64) -> CommentKey {
        CommentKey {
            thread: self.clone(),
            comment_id,
        }
    }
}

impl fmt::Display for ThreadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.channel, self.thread_id)
    }
}

/// Key identifying a comment: thread key plus per-thread comment id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentKey {
    pub thread: ThreadKey,
    pub comment_id: i64,
}

impl CommentKey {
    /// Create a new CommentKey
    pub fn new(thread: ThreadKey, comment_id: i64) -> Self {
        Self { thread, comment_id }
    }
}

impl fmt::Display for CommentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.thread, self.comment_id)
    }
}
