//! Comment entity - a reply inside a thread

use chrono::{DateTime, Utc};

use crate::value_objects::{CommentKey, ThreadKey};

/// Comment entity, numbered per thread starting at 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub thread: ThreadKey,
    pub comment_id: i64,
    pub text: String,
    /// Author username. None when the author's account was deleted.
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment with an already-allocated id
    pub fn new(thread: ThreadKey, comment_id: i64, text: String, owner: String) -> Self {
        Self {
            thread,
            comment_id,
            text,
            owner: Some(owner),
            created_at: Utc::now(),
        }
    }

    /// Full key for this comment
    pub fn key(&self) -> CommentKey {
        self.thread.comment(self.comment_id)
    }

    /// Check if a user authored the comment
    #[inline]
    pub fn is_owner(&self, username: &str) -> bool {
        self.owner.as_deref() == Some(username)
    }
}

/// Data needed to create a comment. The comment id is allocated at insert time.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub thread: ThreadKey,
    pub text: String,
    pub owner: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ChannelName;

    #[test]
    fn test_comment_key() {
        let thread = ThreadKey::new(ChannelName::parse("rust-help").unwrap(), 2);
        let comment = Comment::new(thread, 5, "Try adding a lifetime.".to_string(), "bob".to_string());
        assert_eq!(comment.key().to_string(), "rust-help/2/5");
        assert!(comment.is_owner("bob"));
    }
}
