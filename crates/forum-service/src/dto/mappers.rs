//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use forum_core::entities::{Channel, Comment, Favorite, Thread, User};

use super::responses::{
    ChannelResponse, CommentResponse, FavoriteResponse, ThreadDetailResponse, ThreadResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            shown_name: user.shown_name().to_string(),
            is_active: user.is_active,
            is_staff: user.is_staff,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Channel Mappers
// ============================================================================

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        Self {
            name: channel.name.to_string(),
            description: channel.description.clone(),
            owner: channel.owner.clone(),
            moderators: channel.moderators.clone(),
            banned: channel.banned.clone(),
            created_at: channel.created_at,
            recent_at: channel.recent_at,
        }
    }
}

impl From<Channel> for ChannelResponse {
    fn from(channel: Channel) -> Self {
        Self::from(&channel)
    }
}

// ============================================================================
// Thread Mappers
// ============================================================================

impl From<&Thread> for ThreadResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            channel: thread.channel.to_string(),
            thread_id: thread.thread_id,
            name: thread.name.clone(),
            description: thread.description.clone(),
            owner: thread.owner.clone(),
            pinned: thread.pinned,
            created_at: thread.created_at,
            recent_at: thread.recent_at,
        }
    }
}

impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self::from(&thread)
    }
}

/// Helper struct for creating ThreadDetailResponse
pub struct ThreadWithCount {
    pub thread: Thread,
    pub comment_count: i64,
}

impl From<ThreadWithCount> for ThreadDetailResponse {
    fn from(detail: ThreadWithCount) -> Self {
        Self {
            thread: ThreadResponse::from(&detail.thread),
            comment_count: detail.comment_count,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            channel: comment.thread.channel.to_string(),
            thread_id: comment.thread.thread_id,
            comment_id: comment.comment_id,
            text: comment.text.clone(),
            owner: comment.owner.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Favorite Mappers
// ============================================================================

impl From<&Favorite> for FavoriteResponse {
    fn from(favorite: &Favorite) -> Self {
        Self {
            username: favorite.username.clone(),
            channel: favorite.thread.channel.to_string(),
            thread_id: favorite.thread.thread_id,
            created_at: favorite.created_at,
        }
    }
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self::from(&favorite)
    }
}
