//! Comment handlers
//!
//! Endpoints for comments within a thread.

use axum::{extract::State, Json};
use forum_service::dto::{CommentResponse, CreateCommentRequest};
use forum_service::CommentService;

use crate::extractors::{ApiPath, AuthUser, CommentPath, ThreadPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Post a comment in a thread
///
/// POST /channels/{channel_name}/threads/{thread_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ThreadPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let key = path.key()?;
    let service = CommentService::new(state.service_context());
    let response = service.create_comment(&auth.username, &key, request).await?;
    Ok(Created(Json(response)))
}

/// List comments in a thread
///
/// GET /channels/{channel_name}/threads/{thread_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<ThreadPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let key = path.key()?;
    let service = CommentService::new(state.service_context());
    let response = service.list_comments(&key).await?;
    Ok(Json(response))
}

/// Delete a single comment
///
/// DELETE /channels/{channel_name}/threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<CommentPath>,
) -> ApiResult<NoContent> {
    let key = path.key()?;
    let service = CommentService::new(state.service_context());
    service.delete_comment(&auth.username, &key).await?;
    Ok(NoContent)
}
