//! # forum-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! owner-succession decision machine. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod cascade;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use cascade::{ChannelSuccession, SuccessionDecision, UserDeletionOutcome};
pub use entities::{Channel, Comment, Favorite, NewComment, NewThread, Thread, User};
pub use error::DomainError;
pub use traits::{
    ChannelRepository, CommentRepository, FavoriteRepository, RepoResult, ThreadRepository,
    UserRepository,
};
pub use value_objects::{ChannelName, ChannelNameError, CommentKey, Permissions, ThreadKey};
