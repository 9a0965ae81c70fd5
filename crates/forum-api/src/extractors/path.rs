//! Path parameter extractors
//!
//! Type-safe extraction of channel names, thread ids, and comment ids from
//! path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use forum_core::{ChannelName, CommentKey, ThreadKey};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract typed path parameters, mapping rejection to an API error
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(ApiPath(inner))
    }
}

/// Path parameters with a channel name
#[derive(Debug, serde::Deserialize)]
pub struct ChannelPath {
    pub channel_name: String,
}

impl ChannelPath {
    /// Parse the channel name
    pub fn channel(&self) -> Result<ChannelName, ApiError> {
        parse_channel_name(&self.channel_name)
    }
}

/// Path parameters addressing a thread
#[derive(Debug, serde::Deserialize)]
pub struct ThreadPath {
    pub channel_name: String,
    pub thread_id: i64,
}

impl ThreadPath {
    /// Build the thread key
    pub fn key(&self) -> Result<ThreadKey, ApiError> {
        Ok(ThreadKey::new(
            parse_channel_name(&self.channel_name)?,
            self.thread_id,
        ))
    }
}

/// Path parameters addressing a comment
#[derive(Debug, serde::Deserialize)]
pub struct CommentPath {
    pub channel_name: String,
    pub thread_id: i64,
    pub comment_id: i64,
}

impl CommentPath {
    /// Build the comment key
    pub fn key(&self) -> Result<CommentKey, ApiError> {
        let thread = ThreadKey::new(parse_channel_name(&self.channel_name)?, self.thread_id);
        Ok(thread.comment(self.comment_id))
    }
}

/// Path parameters with a username
#[derive(Debug, serde::Deserialize)]
pub struct UserPath {
    pub username: String,
}

/// Path parameters with a channel name and a username
#[derive(Debug, serde::Deserialize)]
pub struct ChannelUserPath {
    pub channel_name: String,
    pub username: String,
}

impl ChannelUserPath {
    /// Parse the channel name
    pub fn channel(&self) -> Result<ChannelName, ApiError> {
        parse_channel_name(&self.channel_name)
    }
}

fn parse_channel_name(raw: &str) -> Result<ChannelName, ApiError> {
    ChannelName::parse(raw).map_err(|e| ApiError::invalid_path(e.to_string()))
}
