//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, register_user, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
    assert_eq!(user.shown_name, request.username);
    assert!(user.is_active);
    assert!(!user.is_staff);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/users", &request).await.unwrap();

    // Second registration with same username
    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_invalid_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.username = "bad name!".to_string();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let token = register_user(&server, &request).await.unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, request.username);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Channel Tests
// ============================================================================

#[tokio::test]
async fn test_create_channel() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let token = register_user(&server, &register_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    let response = server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();
    let channel: ChannelResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(channel.name, channel_req.name);
    assert_eq!(channel.owner.as_deref(), Some(register_req.username.as_str()));
    assert!(channel.banned.is_empty());
}

#[tokio::test]
async fn test_create_channel_duplicate_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let token = register_user(&server, &register_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_get_channel() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let token = register_user(&server, &register_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();

    // Channels are publicly readable
    let response = server
        .get(&format!("/api/v1/channels/{}", channel_req.name))
        .await
        .unwrap();
    let channel: ChannelResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(channel.name, channel_req.name);
    assert_eq!(channel.description, channel_req.description);
}

#[tokio::test]
async fn test_delete_channel() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let token = register_user(&server, &register_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/channels/{}", channel_req.name), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/v1/channels/{}", channel_req.name))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_thread_ids_are_sequential_per_channel() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let token = register_user(&server, &register_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();
    let threads_path = format!("/api/v1/channels/{}/threads", channel_req.name);

    // First thread in a channel gets id 0, the next 1
    let response = server
        .post_auth(&threads_path, &token, &CreateThreadRequest::unique())
        .await
        .unwrap();
    let first: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first.thread_id, 0);

    let response = server
        .post_auth(&threads_path, &token, &CreateThreadRequest::unique())
        .await
        .unwrap();
    let second: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(second.thread_id, 1);

    // A fresh channel starts over at 0
    let other_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &token, &other_req)
        .await
        .unwrap();
    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/threads", other_req.name),
            &token,
            &CreateThreadRequest::unique(),
        )
        .await
        .unwrap();
    let fresh: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(fresh.thread_id, 0);
}

#[tokio::test]
async fn test_list_threads_unknown_channel() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/channels/no-such-channel/threads")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_thread_requires_author_or_permission() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author_req = RegisterRequest::unique();
    let author_token = register_user(&server, &author_req).await.unwrap();
    let other_req = RegisterRequest::unique();
    let other_token = register_user(&server, &other_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &author_token, &channel_req)
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/threads", channel_req.name),
            &author_token,
            &CreateThreadRequest::unique(),
        )
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let thread_path = format!(
        "/api/v1/channels/{}/threads/{}",
        channel_req.name, thread.thread_id
    );

    // A plain member cannot delete someone else's thread
    let response = server.delete_auth(&thread_path, &other_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The author can
    let response = server
        .delete_auth(&thread_path, &author_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&thread_path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_pin_thread_requires_permission() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner_req = RegisterRequest::unique();
    let owner_token = register_user(&server, &owner_req).await.unwrap();
    let member_req = RegisterRequest::unique();
    let member_token = register_user(&server, &member_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &owner_token, &channel_req)
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/threads", channel_req.name),
            &member_token,
            &CreateThreadRequest::unique(),
        )
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let pin_path = format!(
        "/api/v1/channels/{}/threads/{}/pin",
        channel_req.name, thread.thread_id
    );

    // Members cannot pin, not even their own threads
    let response = server
        .put_auth(&pin_path, &member_token, &PinThreadRequest { pinned: true })
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The channel owner can
    let response = server
        .put_auth(&pin_path, &owner_token, &PinThreadRequest { pinned: true })
        .await
        .unwrap();
    let pinned: ThreadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pinned.pinned);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_ids_are_sequential_per_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let token = register_user(&server, &register_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();
    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/threads", channel_req.name),
            &token,
            &CreateThreadRequest::unique(),
        )
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let comments_path = format!(
        "/api/v1/channels/{}/threads/{}/comments",
        channel_req.name, thread.thread_id
    );

    for i in 0..3 {
        let comment_req = CreateCommentRequest::simple(&format!("Comment number {i}"));
        let response = server
            .post_auth(&comments_path, &token, &comment_req)
            .await
            .unwrap();
        let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(comment.comment_id, i);
    }

    // Listing returns all three, and the thread detail counts them
    let response = server.get(&comments_path).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 3);

    let response = server
        .get(&format!(
            "/api/v1/channels/{}/threads/{}",
            channel_req.name, thread.thread_id
        ))
        .await
        .unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.comment_count, 3);
}

#[tokio::test]
async fn test_banned_user_cannot_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner_req = RegisterRequest::unique();
    let owner_token = register_user(&server, &owner_req).await.unwrap();
    let member_req = RegisterRequest::unique();
    let member_token = register_user(&server, &member_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &owner_token, &channel_req)
        .await
        .unwrap();

    let ban_req = BanRequest {
        username: member_req.username.clone(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/bans", channel_req.name),
            &owner_token,
            &ban_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/threads", channel_req.name),
            &member_token,
            &CreateThreadRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_favorite_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let token = register_user(&server, &register_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();
    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/threads", channel_req.name),
            &token,
            &CreateThreadRequest::unique(),
        )
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let favorite_path = format!(
        "/api/v1/channels/{}/threads/{}/favorite",
        channel_req.name, thread.thread_id
    );

    // Add
    let response = server.put_auth(&favorite_path, &token, &()).await.unwrap();
    let favorite: FavoriteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(favorite.username, register_req.username);
    assert_eq!(favorite.thread_id, thread.thread_id);

    // Adding twice conflicts
    let response = server.put_auth(&favorite_path, &token, &()).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Listing returns the bookmarked thread
    let response = server
        .get_auth("/api/v1/users/@me/favorites", &token)
        .await
        .unwrap();
    let favorites: Vec<ThreadResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorites
        .iter()
        .any(|t| t.channel == channel_req.name && t.thread_id == thread.thread_id));

    // Remove
    let response = server.delete_auth(&favorite_path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Removing again is a 404
    let response = server.delete_auth(&favorite_path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// User Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_delete_user_removes_channel_without_successor() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let token = register_user(&server, &register_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &token, &channel_req)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/users/{}", register_req.username), &token)
        .await
        .unwrap();
    let outcome: UserDeletionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(outcome.username, register_req.username);
    assert!(outcome.deleted_channels.contains(&channel_req.name));
    assert!(outcome.reassigned_channels.is_empty());

    // The channel is gone along with the account
    let response = server
        .get(&format!("/api/v1/channels/{}", channel_req.name))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_user_reassigns_channel_to_moderator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner_req = RegisterRequest::unique();
    let owner_token = register_user(&server, &owner_req).await.unwrap();
    let moderator_req = RegisterRequest::unique();
    register_user(&server, &moderator_req).await.unwrap();

    let channel_req = CreateChannelRequest::unique();
    server
        .post_auth("/api/v1/channels", &owner_token, &channel_req)
        .await
        .unwrap();

    let moderator_body = ModeratorRequest {
        username: moderator_req.username.clone(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/moderators", channel_req.name),
            &owner_token,
            &moderator_body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/users/{}", owner_req.username), &owner_token)
        .await
        .unwrap();
    let outcome: UserDeletionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(outcome
        .reassigned_channels
        .iter()
        .any(|s| s.channel == channel_req.name && s.new_owner == moderator_req.username));

    // The channel survives under the new owner
    let response = server
        .get(&format!("/api/v1/channels/{}", channel_req.name))
        .await
        .unwrap();
    let channel: ChannelResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        channel.owner.as_deref(),
        Some(moderator_req.username.as_str())
    );
}
