//! Thread handlers
//!
//! Endpoints for threads within a channel.

use axum::{extract::State, Json};
use forum_service::dto::{
    CreateThreadRequest, PinThreadRequest, ThreadDetailResponse, ThreadResponse,
    UpdateThreadRequest,
};
use forum_service::ThreadService;

use crate::extractors::{ApiPath, AuthUser, ChannelPath, ThreadPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new thread
///
/// POST /channels/{channel_name}/threads
pub async fn create_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ChannelPath>,
    ValidatedJson(request): ValidatedJson<CreateThreadRequest>,
) -> ApiResult<Created<Json<ThreadResponse>>> {
    let name = path.channel()?;
    let service = ThreadService::new(state.service_context());
    let response = service.create_thread(&auth.username, &name, request).await?;
    Ok(Created(Json(response)))
}

/// List threads in a channel
///
/// GET /channels/{channel_name}/threads
pub async fn list_threads(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<ChannelPath>,
) -> ApiResult<Json<Vec<ThreadResponse>>> {
    let name = path.channel()?;
    let service = ThreadService::new(state.service_context());
    let response = service.list_threads(&name).await?;
    Ok(Json(response))
}

/// Get thread by key
///
/// GET /channels/{channel_name}/threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<ThreadPath>,
) -> ApiResult<Json<ThreadDetailResponse>> {
    let key = path.key()?;
    let service = ThreadService::new(state.service_context());
    let response = service.get_thread(&key).await?;
    Ok(Json(response))
}

/// Update a thread's name or description
///
/// PATCH /channels/{channel_name}/threads/{thread_id}
pub async fn update_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ThreadPath>,
    ValidatedJson(request): ValidatedJson<UpdateThreadRequest>,
) -> ApiResult<Json<ThreadResponse>> {
    let key = path.key()?;
    let service = ThreadService::new(state.service_context());
    let response = service.update_thread(&auth.username, &key, request).await?;
    Ok(Json(response))
}

/// Pin or unpin a thread
///
/// PUT /channels/{channel_name}/threads/{thread_id}/pin
pub async fn set_pinned(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ThreadPath>,
    Json(request): Json<PinThreadRequest>,
) -> ApiResult<Json<ThreadResponse>> {
    let key = path.key()?;
    let service = ThreadService::new(state.service_context());
    let response = service
        .set_pinned(&auth.username, &key, request.pinned)
        .await?;
    Ok(Json(response))
}

/// Delete a thread and everything underneath it
///
/// DELETE /channels/{channel_name}/threads/{thread_id}
pub async fn delete_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ThreadPath>,
) -> ApiResult<NoContent> {
    let key = path.key()?;
    let service = ThreadService::new(state.service_context());
    service.delete_thread(&auth.username, &key).await?;
    Ok(NoContent)
}
