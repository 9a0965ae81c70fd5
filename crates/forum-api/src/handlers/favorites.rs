//! Favorite handlers
//!
//! Endpoints for a user's thread bookmarks.

use axum::{extract::State, Json};
use forum_service::dto::{FavoriteResponse, ThreadResponse};
use forum_service::FavoriteService;

use crate::extractors::{ApiPath, AuthUser, ThreadPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Bookmark a thread
///
/// PUT /channels/{channel_name}/threads/{thread_id}/favorite
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ThreadPath>,
) -> ApiResult<Created<Json<FavoriteResponse>>> {
    let key = path.key()?;
    let service = FavoriteService::new(state.service_context());
    let response = service.add_favorite(&auth.username, &key).await?;
    Ok(Created(Json(response)))
}

/// Remove a bookmark
///
/// DELETE /channels/{channel_name}/threads/{thread_id}/favorite
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ThreadPath>,
) -> ApiResult<NoContent> {
    let key = path.key()?;
    let service = FavoriteService::new(state.service_context());
    service.remove_favorite(&auth.username, &key).await?;
    Ok(NoContent)
}

/// List the current user's bookmarked threads
///
/// GET /users/@me/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ThreadResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let response = service.list_favorites(&auth.username).await?;
    Ok(Json(response))
}
