//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use services::{
    ChannelService, CommentService, FavoriteService, PermissionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ThreadService, UserService,
};
