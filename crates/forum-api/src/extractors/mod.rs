//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and typed path
//! parameters.

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::{ApiPath, ChannelPath, ChannelUserPath, CommentPath, ThreadPath, UserPath};
pub use validated::ValidatedJson;
