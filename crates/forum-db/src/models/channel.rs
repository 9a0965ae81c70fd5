//! Channel database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for channels table
///
/// Moderator and ban lists are small and ordered, so they live as JSONB
/// arrays on the channel row rather than in join tables.
#[derive(Debug, Clone, FromRow)]
pub struct ChannelModel {
    pub channel_name: String,
    pub description: String,
    pub owner: Option<String>,
    pub moderators: Json<Vec<String>>,
    pub banned: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub recent_at: DateTime<Utc>,
}
