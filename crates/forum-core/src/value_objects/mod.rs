//! Value objects - immutable types that represent domain concepts

mod channel_name;
mod keys;
mod permissions;

pub use channel_name::{ChannelName, ChannelNameError};
pub use keys::{CommentKey, ThreadKey};
pub use permissions::Permissions;
