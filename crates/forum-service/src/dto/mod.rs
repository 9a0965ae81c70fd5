//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    BanRequest, CreateChannelRequest, CreateCommentRequest, CreateThreadRequest,
    CreateUserRequest, ModeratorRequest, PinThreadRequest, UpdateChannelRequest,
    UpdateThreadRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, ChannelResponse, ChannelSuccessionResponse, CommentResponse, FavoriteResponse,
    HealthChecks, HealthResponse, ReadinessResponse, ThreadDetailResponse, ThreadResponse,
    UserDeletionResponse, UserResponse,
};

// Re-export mapper helper structs
pub use mappers::ThreadWithCount;
