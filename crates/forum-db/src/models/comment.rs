//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table, keyed by (channel_name, thread_id, comment_id)
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub channel_name: String,
    pub thread_id: i64,
    pub comment_id: i64,
    pub text: String,
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}
