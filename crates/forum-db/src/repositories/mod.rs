//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod channel;
mod comment;
mod error;
mod favorite;
mod thread;
mod user;

pub use channel::PgChannelRepository;
pub use comment::PgCommentRepository;
pub use favorite::PgFavoriteRepository;
pub use thread::PgThreadRepository;
pub use user::PgUserRepository;
