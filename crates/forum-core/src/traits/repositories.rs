//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Threads and comments get their per-parent ids allocated inside `create`,
//! which is why those methods return the stored entity rather than unit: the
//! caller only learns the allocated id from the insert itself.

use async_trait::async_trait;

use crate::cascade::UserDeletionOutcome;
use crate::entities::{Channel, Comment, Favorite, NewComment, NewThread, Thread, User};
use crate::error::DomainError;
use crate::value_objects::{ChannelName, CommentKey, ThreadKey};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Hard delete a user row. Succession and orphaning of the user's
    /// content must already have happened.
    async fn delete(&self, username: &str) -> RepoResult<()>;

    /// Delete a user together with everything that references them, in a
    /// single transaction: each owned channel is handed to its senior
    /// surviving moderator or cascade-deleted, remaining threads and
    /// comments are orphaned in place, and favorites are removed before
    /// the user row itself goes.
    async fn delete_with_succession(&self, username: &str) -> RepoResult<UserDeletionOutcome>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by name
    async fn find_by_name(&self, name: &ChannelName) -> RepoResult<Option<Channel>>;

    /// List all channels, most recently active first
    async fn list(&self) -> RepoResult<Vec<Channel>>;

    /// List channels owned by a user
    async fn list_owned_by(&self, username: &str) -> RepoResult<Vec<Channel>>;

    /// Create a new channel
    async fn create(&self, channel: &Channel) -> RepoResult<()>;

    /// Update an existing channel (description, owner, moderators, bans)
    async fn update(&self, channel: &Channel) -> RepoResult<()>;

    /// Delete a channel and, in the same transaction, every thread,
    /// comment, and favorite underneath it
    async fn delete_cascade(&self, name: &ChannelName) -> RepoResult<()>;
}

// ============================================================================
// Thread Repository
// ============================================================================

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find thread by key
    async fn find(&self, key: &ThreadKey) -> RepoResult<Option<Thread>>;

    /// List threads in a channel, pinned first then most recently active
    async fn find_by_channel(&self, channel: &ChannelName) -> RepoResult<Vec<Thread>>;

    /// Insert a thread, atomically allocating the next thread id within
    /// its channel and bumping the channel's activity timestamp in the
    /// same transaction. Returns the stored thread carrying the
    /// allocated id.
    async fn create(&self, thread: &NewThread) -> RepoResult<Thread>;

    /// Update an existing thread (name, description, pinned)
    async fn update(&self, thread: &Thread) -> RepoResult<()>;

    /// Delete a thread and, in the same transaction, every comment and
    /// favorite underneath it
    async fn delete_cascade(&self, key: &ThreadKey) -> RepoResult<()>;

    /// Null out the owner on every thread authored by a user.
    /// Returns the number of threads orphaned.
    async fn clear_owner(&self, username: &str) -> RepoResult<u64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by key
    async fn find(&self, key: &CommentKey) -> RepoResult<Option<Comment>>;

    /// List comments in a thread, oldest first
    async fn find_by_thread(&self, thread: &ThreadKey) -> RepoResult<Vec<Comment>>;

    /// Count comments in a thread
    async fn count_by_thread(&self, thread: &ThreadKey) -> RepoResult<i64>;

    /// Insert a comment, atomically allocating the next comment id within
    /// its thread and bumping the thread's and channel's activity
    /// timestamps in the same transaction. Returns the stored comment
    /// carrying the allocated id.
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Delete a single comment
    async fn delete(&self, key: &CommentKey) -> RepoResult<()>;

    /// Null out the owner on every comment authored by a user.
    /// Returns the number of comments orphaned.
    async fn clear_owner(&self, username: &str) -> RepoResult<u64>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Find a favorite by user and thread
    async fn find(&self, username: &str, thread: &ThreadKey) -> RepoResult<Option<Favorite>>;

    /// List a user's favorites, most recent first
    async fn find_by_user(&self, username: &str) -> RepoResult<Vec<Favorite>>;

    /// Create a favorite
    async fn create(&self, favorite: &Favorite) -> RepoResult<()>;

    /// Remove a favorite
    async fn delete(&self, username: &str, thread: &ThreadKey) -> RepoResult<()>;

    /// Remove every favorite belonging to a user.
    /// Returns the number of favorites removed.
    async fn delete_by_user(&self, username: &str) -> RepoResult<u64>;
}
