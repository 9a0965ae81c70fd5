//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod channel;
pub mod comment;
pub mod context;
pub mod error;
pub mod favorite;
pub mod permission;
pub mod thread;
pub mod user;

// Re-export all services for convenience
pub use channel::ChannelService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;
pub use permission::PermissionService;
pub use thread::ThreadService;
pub use user::UserService;
