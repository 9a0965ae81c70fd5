//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 64, message = "Display name must be at most 64 characters"))]
    pub display_name: Option<String>,
}

/// Update user profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 64, message = "Display name must be at most 64 characters"))]
    pub display_name: Option<String>,
}

// ============================================================================
// Channel Requests
// ============================================================================

/// Create channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChannelRequest {
    #[validate(length(min = 3, max = 30, message = "Channel name must be 3-30 characters"))]
    pub name: String,

    #[validate(length(min = 6, message = "Description must be at least 6 characters"))]
    pub description: String,
}

/// Update channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateChannelRequest {
    #[validate(length(min = 6, message = "Description must be at least 6 characters"))]
    pub description: Option<String>,

    /// Transfer ownership to another user
    pub owner: Option<String>,
}

/// Add or remove a channel moderator
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ModeratorRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,
}

/// Ban or unban a user from a channel
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BanRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,
}

// ============================================================================
// Thread Requests
// ============================================================================

/// Create thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(min = 6, max = 90, message = "Thread name must be 6-90 characters"))]
    pub name: String,

    #[validate(length(min = 6, message = "Description must be at least 6 characters"))]
    pub description: String,
}

/// Update thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateThreadRequest {
    #[validate(length(min = 6, max = 90, message = "Thread name must be 6-90 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 6, message = "Description must be at least 6 characters"))]
    pub description: Option<String>,
}

/// Pin or unpin a thread
#[derive(Debug, Clone, Deserialize)]
pub struct PinThreadRequest {
    pub pinned: bool,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 6, max = 250, message = "Comment text must be 6-250 characters"))]
    pub text: String,
}
