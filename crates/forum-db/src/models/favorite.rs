//! Favorite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for favorites table
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteModel {
    pub username: String,
    pub channel_name: String,
    pub thread_id: i64,
    pub created_at: DateTime<Utc>,
}
