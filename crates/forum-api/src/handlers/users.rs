//! User handlers
//!
//! Endpoints for account registration, profiles, and site-wide moderation.

use axum::{extract::State, Json};
use forum_service::dto::{
    CreateUserRequest, UpdateUserRequest, UserDeletionResponse, UserResponse,
};
use forum_service::UserService;

use crate::extractors::{ApiPath, AuthUser, UserPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Get the current user's profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(&auth.username).await?;
    Ok(Json(response))
}

/// Get a user's profile
///
/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<UserPath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(&path.username).await?;
    Ok(Json(response))
}

/// Update a user's profile
///
/// PATCH /users/{username}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<UserPath>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .update_user(&auth.username, &path.username, request)
        .await?;
    Ok(Json(response))
}

/// Deactivate an account site-wide (staff only)
///
/// POST /users/{username}/deactivate
pub async fn deactivate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<UserPath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .deactivate_user(&auth.username, &path.username)
        .await?;
    Ok(Json(response))
}

/// Reactivate an account (staff only)
///
/// POST /users/{username}/activate
pub async fn activate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<UserPath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .activate_user(&auth.username, &path.username)
        .await?;
    Ok(Json(response))
}

/// Delete an account, running owner succession on its channels
///
/// DELETE /users/{username}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<UserPath>,
) -> ApiResult<Json<UserDeletionResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.delete_user(&auth.username, &path.username).await?;
    Ok(Json(response))
}
