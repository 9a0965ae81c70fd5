//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(db_healthy: bool) -> Self {
        let verdict = |ok: bool| if ok { "ok" } else { "unavailable" };
        Self {
            status: verdict(db_healthy).to_string(),
            checks: HealthChecks {
                database: verdict(db_healthy).to_string(),
            },
        }
    }
}

/// Individual dependency checks for readiness
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// User profile response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Display name when set, otherwise the username
    pub shown_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

/// Outcome of deleting a user account
///
/// Reports what happened to the channels the user owned and how much of
/// their content was orphaned.
#[derive(Debug, Serialize)]
pub struct UserDeletionResponse {
    pub username: String,
    /// Channels handed to the senior moderator
    pub reassigned_channels: Vec<ChannelSuccessionResponse>,
    /// Channels removed because no successor existed
    pub deleted_channels: Vec<String>,
    pub orphaned_threads: u64,
    pub orphaned_comments: u64,
}

/// A single ownership handover during user deletion
#[derive(Debug, Serialize)]
pub struct ChannelSuccessionResponse {
    pub channel: String,
    pub new_owner: String,
}

// ============================================================================
// Channel Responses
// ============================================================================

/// Channel response
#[derive(Debug, Clone, Serialize)]
pub struct ChannelResponse {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub moderators: Vec<String>,
    pub banned: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub recent_at: DateTime<Utc>,
}

// ============================================================================
// Thread Responses
// ============================================================================

/// Thread response
#[derive(Debug, Clone, Serialize)]
pub struct ThreadResponse {
    pub channel: String,
    pub thread_id: i64,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub recent_at: DateTime<Utc>,
}

/// Thread response with its comment count
#[derive(Debug, Serialize)]
pub struct ThreadDetailResponse {
    #[serde(flatten)]
    pub thread: ThreadResponse,
    pub comment_count: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub channel: String,
    pub thread_id: i64,
    pub comment_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Favorite Responses
// ============================================================================

/// Favorite response
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub username: String,
    pub channel: String,
    pub thread_id: i64,
    pub created_at: DateTime<Utc>,
}
