//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CommentKey, ThreadKey};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Thread not found: {0}")]
    ThreadNotFound(ThreadKey),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentKey),

    #[error("Favorite not found")]
    FavoriteNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid channel name: {0}")]
    InvalidChannelName(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not channel owner")]
    NotChannelOwner,

    #[error("Not the author")]
    NotAuthor,

    #[error("Account is deactivated")]
    AccountDeactivated,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Channel name already taken: {0}")]
    ChannelNameTaken(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Already a moderator")]
    AlreadyModerator,

    #[error("Already favorited")]
    AlreadyFavorited,

    #[error("Sequence conflict: could not allocate an id after {attempts} attempts")]
    SequenceConflict { attempts: u32 },

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot ban the channel owner")]
    CannotBanOwner,

    #[error("Cannot moderate the channel owner")]
    CannotModerateOwner,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::FavoriteNotFound => "UNKNOWN_FAVORITE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidChannelName(_) => "INVALID_CHANNEL_NAME",
            Self::InvalidUsername(_) => "INVALID_USERNAME",

            // Authorization
            Self::NotChannelOwner => "NOT_CHANNEL_OWNER",
            Self::NotAuthor => "NOT_AUTHOR",
            Self::AccountDeactivated => "ACCOUNT_DEACTIVATED",

            // Conflict
            Self::ChannelNameTaken(_) => "CHANNEL_NAME_TAKEN",
            Self::UsernameTaken(_) => "USERNAME_TAKEN",
            Self::AlreadyModerator => "ALREADY_MODERATOR",
            Self::AlreadyFavorited => "ALREADY_FAVORITED",
            Self::SequenceConflict { .. } => "SEQUENCE_CONFLICT",

            // Business Rules
            Self::CannotBanOwner => "CANNOT_BAN_OWNER",
            Self::CannotModerateOwner => "CANNOT_MODERATE_OWNER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::ThreadNotFound(_)
                | Self::CommentNotFound(_)
                | Self::FavoriteNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidChannelName(_) | Self::InvalidUsername(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotChannelOwner | Self::NotAuthor | Self::AccountDeactivated
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ChannelNameTaken(_)
                | Self::UsernameTaken(_)
                | Self::AlreadyModerator
                | Self::AlreadyFavorited
                | Self::SequenceConflict { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ChannelName;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound("ghost".to_string());
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::NotChannelOwner;
        assert_eq!(err.code(), "NOT_CHANNEL_OWNER");
    }

    #[test]
    fn test_is_not_found() {
        let key = ThreadKey::new(ChannelName::parse("general").unwrap(), 0);
        assert!(DomainError::ThreadNotFound(key).is_not_found());
        assert!(DomainError::UserNotFound("x".to_string()).is_not_found());
        assert!(!DomainError::ChannelNameTaken("general".to_string()).is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::SequenceConflict { attempts: 3 }.is_conflict());
        assert!(DomainError::ChannelNameTaken("general".to_string()).is_conflict());
        assert!(!DomainError::NotChannelOwner.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ChannelNotFound("rust-help".to_string());
        assert_eq!(err.to_string(), "Channel not found: rust-help");

        let err = DomainError::SequenceConflict { attempts: 3 };
        assert_eq!(
            err.to_string(),
            "Sequence conflict: could not allocate an id after 3 attempts"
        );
    }
}
