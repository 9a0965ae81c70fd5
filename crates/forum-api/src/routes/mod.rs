//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{channels, comments, favorites, health, threads, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(channel_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register))
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/favorites", get(favorites::list_favorites))
        .route("/users/:username", get(users::get_user))
        .route("/users/:username", patch(users::update_user))
        .route("/users/:username", delete(users::delete_user))
        .route("/users/:username/deactivate", post(users::deactivate_user))
        .route("/users/:username/activate", post(users::activate_user))
}

/// Channel routes, including the threads and comments nested under them
fn channel_routes() -> Router<AppState> {
    Router::new()
        // Channel CRUD
        .route("/channels", get(channels::list_channels))
        .route("/channels", post(channels::create_channel))
        .route("/channels/:channel_name", get(channels::get_channel))
        .route("/channels/:channel_name", patch(channels::update_channel))
        .route("/channels/:channel_name", delete(channels::delete_channel))
        // Moderators
        .route(
            "/channels/:channel_name/moderators",
            post(channels::add_moderator),
        )
        .route(
            "/channels/:channel_name/moderators/:username",
            delete(channels::remove_moderator),
        )
        // Bans
        .route("/channels/:channel_name/bans", post(channels::ban_user))
        .route(
            "/channels/:channel_name/bans/:username",
            delete(channels::unban_user),
        )
        // Threads
        .route(
            "/channels/:channel_name/threads",
            get(threads::list_threads),
        )
        .route(
            "/channels/:channel_name/threads",
            post(threads::create_thread),
        )
        .route(
            "/channels/:channel_name/threads/:thread_id",
            get(threads::get_thread),
        )
        .route(
            "/channels/:channel_name/threads/:thread_id",
            patch(threads::update_thread),
        )
        .route(
            "/channels/:channel_name/threads/:thread_id",
            delete(threads::delete_thread),
        )
        .route(
            "/channels/:channel_name/threads/:thread_id/pin",
            put(threads::set_pinned),
        )
        // Favorites
        .route(
            "/channels/:channel_name/threads/:thread_id/favorite",
            put(favorites::add_favorite),
        )
        .route(
            "/channels/:channel_name/threads/:thread_id/favorite",
            delete(favorites::remove_favorite),
        )
        // Comments
        .route(
            "/channels/:channel_name/threads/:thread_id/comments",
            get(comments::list_comments),
        )
        .route(
            "/channels/:channel_name/threads/:thread_id/comments",
            post(comments::create_comment),
        )
        .route(
            "/channels/:channel_name/threads/:thread_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
}
