//! Entity <-> model mappers
//!
//! Conversions from database rows back to entities are fallible because
//! channel names are stored as plain text and re-validated on the way out.

mod channel;
mod comment;
mod favorite;
mod thread;
mod user;

pub use channel::channel_from_model;
pub use comment::comment_from_model;
pub use favorite::favorite_from_model;
pub use thread::thread_from_model;
