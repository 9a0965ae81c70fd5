//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            display_name: None,
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub shown_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: String,
}

/// User deletion outcome
#[derive(Debug, Deserialize)]
pub struct UserDeletionResponse {
    pub username: String,
    pub reassigned_channels: Vec<ChannelSuccessionResponse>,
    pub deleted_channels: Vec<String>,
    pub orphaned_threads: u64,
    pub orphaned_comments: u64,
}

/// A single ownership handover during user deletion
#[derive(Debug, Deserialize)]
pub struct ChannelSuccessionResponse {
    pub channel: String,
    pub new_owner: String,
}

/// Create channel request
#[derive(Debug, Serialize)]
pub struct CreateChannelRequest {
    pub name: String,
    pub description: String,
}

impl CreateChannelRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("channel-{suffix}"),
            description: "A test channel".to_string(),
        }
    }
}

/// Channel response
#[derive(Debug, Deserialize)]
pub struct ChannelResponse {
    pub name: String,
    pub description: String,
    pub owner: Option<String>,
    pub moderators: Vec<String>,
    pub banned: Vec<String>,
    pub created_at: String,
    pub recent_at: String,
}

/// Moderator request
#[derive(Debug, Serialize)]
pub struct ModeratorRequest {
    pub username: String,
}

/// Ban request
#[derive(Debug, Serialize)]
pub struct BanRequest {
    pub username: String,
}

/// Create thread request
#[derive(Debug, Serialize)]
pub struct CreateThreadRequest {
    pub name: String,
    pub description: String,
}

impl CreateThreadRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test thread {suffix}"),
            description: "An interesting discussion".to_string(),
        }
    }
}

/// Pin request
#[derive(Debug, Serialize)]
pub struct PinThreadRequest {
    pub pinned: bool,
}

/// Thread response
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    pub channel: String,
    pub thread_id: i64,
    pub name: String,
    pub description: String,
    pub owner: Option<String>,
    pub pinned: bool,
    pub created_at: String,
    pub recent_at: String,
}

/// Thread response with its comment count
#[derive(Debug, Deserialize)]
pub struct ThreadDetailResponse {
    #[serde(flatten)]
    pub thread: ThreadResponse,
    pub comment_count: i64,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

impl CreateCommentRequest {
    pub fn simple(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub channel: String,
    pub thread_id: i64,
    pub comment_id: i64,
    pub text: String,
    pub owner: Option<String>,
    pub created_at: String,
}

/// Favorite response
#[derive(Debug, Deserialize)]
pub struct FavoriteResponse {
    pub username: String,
    pub channel: String,
    pub thread_id: i64,
    pub created_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
