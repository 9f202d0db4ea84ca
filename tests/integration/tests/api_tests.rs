//! API Integration Tests
//!
//! These tests run the full HTTP stack against an in-memory ledger and need
//! no external services.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{
    assert_json, assert_status, fixtures::*, FlakyReactionRepository, TestServer,
};
use reqwest::StatusCode;

async fn counts(server: &TestServer, post_id: i64) -> VoteCounts {
    let response = server.get(&votes_path(post_id)).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn vote(server: &TestServer, post_id: i64, body: &VoteBody) -> VoteResult {
    let response = server.post(&vote_path(post_id), body).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_when_storage_down() {
    let repo = Arc::new(FlakyReactionRepository::new());
    repo.set_offline(true);
    let server = TestServer::start_with_repo(repo).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_scenario() {
    let server = TestServer::start().await.unwrap();

    assert_eq!(counts(&server, 42).await, VoteCounts::new(0, 0));

    let result = vote(&server, 42, &VoteBody::up(7)).await;
    assert_eq!(result.message, "Post upvoted");
    assert_eq!(result.kind, "up");
    assert_eq!(counts(&server, 42).await, VoteCounts::new(1, 0));

    let result = vote(&server, 42, &VoteBody::down(7)).await;
    assert_eq!(result.message, "Post downvoted");
    assert_eq!(counts(&server, 42).await, VoteCounts::new(0, 1));

    vote(&server, 42, &VoteBody::up(9)).await;
    assert_eq!(counts(&server, 42).await, VoteCounts::new(1, 1));

    // Other posts are unaffected
    assert_eq!(counts(&server, 43).await, VoteCounts::new(0, 0));
}

#[tokio::test]
async fn test_repeat_vote_is_idempotent() {
    let server = TestServer::start().await.unwrap();

    for _ in 0..3 {
        vote(&server, 1, &VoteBody::up(5)).await;
    }

    assert_eq!(counts(&server, 1).await, VoteCounts::new(1, 0));
}

#[tokio::test]
async fn test_string_user_id_is_accepted() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_raw("/posts/8/vote", r#"{"user_id": "11", "action": "down"}"#)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(counts(&server, 8).await, VoteCounts::new(0, 1));
}

#[tokio::test]
async fn test_user_vote_lookup() {
    let server = TestServer::start().await.unwrap();

    let response = server.get(&user_vote_path(3, 4)).await.unwrap();
    let before: UserVote = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((before.post_id, before.user_id), (3, 4));
    assert!(before.kind.is_none());

    vote(&server, 3, &VoteBody::down(4)).await;

    let response = server.get(&user_vote_path(3, 4)).await.unwrap();
    let after: UserVote = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after.kind.as_deref(), Some("down"));
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[tokio::test]
async fn test_invalid_action_leaves_state_untouched() {
    let server = TestServer::start().await.unwrap();
    vote(&server, 42, &VoteBody::up(7)).await;

    for action in ["like", "UP", "Down", "", "sideways", "sidewayssideways!"] {
        let response = server
            .post(&vote_path(42), &VoteBody::new(7, action))
            .await
            .unwrap();
        let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST)
            .await
            .unwrap();
        assert_eq!(body.error.code, "INVALID_ARGUMENT", "action {action}");
    }

    assert_eq!(counts(&server, 42).await, VoteCounts::new(1, 0));
}

#[tokio::test]
async fn test_malformed_bodies_are_rejected() {
    let server = TestServer::start().await.unwrap();

    let bodies = [
        r#"{"action": "up"}"#,
        r#"{"user_id": 7}"#,
        r#"{"user_id": 7, "action": 1}"#,
        r#"{"user_id": "seven", "action": "up"}"#,
        r#"not json"#,
    ];
    for body in bodies {
        let response = server.post_raw(&vote_path(42), body).await.unwrap();
        assert_status(response, StatusCode::BAD_REQUEST)
            .await
            .unwrap_or_else(|e| panic!("{body}: {e}"));
    }

    assert_eq!(counts(&server, 42).await, VoteCounts::new(0, 0));
}

#[tokio::test]
async fn test_empty_identifiers_are_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server.post(&vote_path(42), &VoteBody::up(0)).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(body.error.code, "INVALID_ARGUMENT");

    let response = server.post(&vote_path(42), &VoteBody::up(-3)).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(body.error.code, "INVALID_ARGUMENT");

    let response = server.post(&vote_path(0), &VoteBody::up(7)).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(body.error.code, "INVALID_ARGUMENT");

    let response = server.get("/posts/not-a-post/votes").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_storage_failure_is_all_or_nothing() {
    let repo = Arc::new(FlakyReactionRepository::new());
    let server = TestServer::start_with_repo(repo.clone()).await.unwrap();

    vote(&server, 42, &VoteBody::up(7)).await;

    repo.set_offline(true);
    let response = server.post(&vote_path(42), &VoteBody::down(7)).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "STORAGE_UNAVAILABLE");
    assert_eq!(body.error.message, "Internal server error");

    let response = server.get(&votes_path(42)).await.unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    repo.set_offline(false);
    assert_eq!(counts(&server, 42).await, VoteCounts::new(1, 0));
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_votes_from_many_users() {
    let server = TestServer::start().await.unwrap();

    let requests = (1..=50).map(|user| {
        let body = if user % 5 == 0 {
            VoteBody::down(user)
        } else {
            VoteBody::up(user)
        };
        let server = &server;
        async move { server.post(&vote_path(77), &body).await }
    });

    let responses = futures::future::join_all(requests).await;
    for response in responses {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    assert_eq!(counts(&server, 77).await, VoteCounts::new(40, 10));
}

#[tokio::test]
async fn test_concurrent_flips_by_one_user_count_once() {
    let server = TestServer::start().await.unwrap();

    let requests = (0..30).map(|i| {
        let body = if i % 2 == 0 {
            VoteBody::up(7)
        } else {
            VoteBody::down(7)
        };
        let server = &server;
        async move { server.post(&vote_path(42), &body).await }
    });

    for response in futures::future::join_all(requests).await {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let counts = counts(&server, 42).await;
    assert_eq!(counts.upvotes + counts.downvotes, 1);

    let response = server.get(&user_vote_path(42, 7)).await.unwrap();
    let stored: UserVote = assert_json(response, StatusCode::OK).await.unwrap();
    let expected = if counts.upvotes == 1 { "up" } else { "down" };
    assert_eq!(stored.kind.as_deref(), Some(expected));
}
