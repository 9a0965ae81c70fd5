//! Domain entities

mod channel;
mod comment;
mod favorite;
mod thread;
mod user;

pub use channel::Channel;
pub use comment::{Comment, NewComment};
pub use favorite::Favorite;
pub use thread::{NewThread, Thread};
pub use user::User;
