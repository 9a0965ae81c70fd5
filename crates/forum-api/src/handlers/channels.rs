//! Channel handlers
//!
//! Endpoints for channel management and moderation.

use axum::{extract::State, Json};
use forum_service::dto::{
    BanRequest, ChannelResponse, CreateChannelRequest, ModeratorRequest, UpdateChannelRequest,
};
use forum_service::ChannelService;

use crate::extractors::{ApiPath, AuthUser, ChannelPath, ChannelUserPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new channel
///
/// POST /channels
pub async fn create_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateChannelRequest>,
) -> ApiResult<Created<Json<ChannelResponse>>> {
    let service = ChannelService::new(state.service_context());
    let response = service.create_channel(&auth.username, request).await?;
    Ok(Created(Json(response)))
}

/// List all channels
///
/// GET /channels
pub async fn list_channels(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let service = ChannelService::new(state.service_context());
    let response = service.list_channels().await?;
    Ok(Json(response))
}

/// Get channel by name
///
/// GET /channels/{channel_name}
pub async fn get_channel(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<ChannelPath>,
) -> ApiResult<Json<ChannelResponse>> {
    let name = path.channel()?;
    let service = ChannelService::new(state.service_context());
    let response = service.get_channel(&name).await?;
    Ok(Json(response))
}

/// Update channel settings
///
/// PATCH /channels/{channel_name}
pub async fn update_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ChannelPath>,
    ValidatedJson(request): ValidatedJson<UpdateChannelRequest>,
) -> ApiResult<Json<ChannelResponse>> {
    let name = path.channel()?;
    let service = ChannelService::new(state.service_context());
    let response = service.update_channel(&auth.username, &name, request).await?;
    Ok(Json(response))
}

/// Delete a channel and everything underneath it
///
/// DELETE /channels/{channel_name}
pub async fn delete_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ChannelPath>,
) -> ApiResult<NoContent> {
    let name = path.channel()?;
    let service = ChannelService::new(state.service_context());
    service.delete_channel(&auth.username, &name).await?;
    Ok(NoContent)
}

/// Appoint a moderator
///
/// POST /channels/{channel_name}/moderators
pub async fn add_moderator(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ChannelPath>,
    ValidatedJson(request): ValidatedJson<ModeratorRequest>,
) -> ApiResult<Json<ChannelResponse>> {
    let name = path.channel()?;
    let service = ChannelService::new(state.service_context());
    let response = service
        .add_moderator(&auth.username, &name, &request.username)
        .await?;
    Ok(Json(response))
}

/// Remove a moderator
///
/// DELETE /channels/{channel_name}/moderators/{username}
pub async fn remove_moderator(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ChannelUserPath>,
) -> ApiResult<Json<ChannelResponse>> {
    let name = path.channel()?;
    let service = ChannelService::new(state.service_context());
    let response = service
        .remove_moderator(&auth.username, &name, &path.username)
        .await?;
    Ok(Json(response))
}

/// Ban a user from the channel
///
/// POST /channels/{channel_name}/bans
pub async fn ban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ChannelPath>,
    ValidatedJson(request): ValidatedJson<BanRequest>,
) -> ApiResult<Json<ChannelResponse>> {
    let name = path.channel()?;
    let service = ChannelService::new(state.service_context());
    let response = service
        .ban_user(&auth.username, &name, &request.username)
        .await?;
    Ok(Json(response))
}

/// Lift a channel ban
///
/// DELETE /channels/{channel_name}/bans/{username}
pub async fn unban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ChannelUserPath>,
) -> ApiResult<Json<ChannelResponse>> {
    let name = path.channel()?;
    let service = ChannelService::new(state.service_context());
    let response = service
        .unban_user(&auth.username, &name, &path.username)
        .await?;
    Ok(Json(response))
}
