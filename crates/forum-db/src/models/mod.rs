//! Database models - SQLx-compatible structs for PostgreSQL tables

mod channel;
mod comment;
mod favorite;
mod thread;
mod user;

pub use channel::ChannelModel;
pub use comment::CommentModel;
pub use favorite::FavoriteModel;
pub use thread::ThreadModel;
pub use user::UserModel;
