//! Thread database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for threads table, keyed by (channel_name, thread_id)
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub channel_name: String,
    pub thread_id: i64,
    pub name: String,
    pub description: String,
    pub owner: Option<String>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub recent_at: DateTime<Utc>,
}
