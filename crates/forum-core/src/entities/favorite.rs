//! Favorite entity - a user's bookmark on a thread

use chrono::{DateTime, Utc};

use crate::value_objects::ThreadKey;

/// Favorite linking a user to a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub username: String,
    pub thread: ThreadKey,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Create a new Favorite
    pub fn new(username: String, thread: ThreadKey) -> Self {
        Self {
            username,
            thread,
            created_at: Utc::now(),
        }
    }
}
