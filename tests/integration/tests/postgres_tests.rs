//! PostgreSQL-backed API tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test postgres_tests

use std::sync::Arc;
use std::time::Duration;

use forum_core::{EntityId, ReactionKind};
use forum_db::{run_migrations, PgPool, PgReactionRepository};
use forum_service::dto::VoteCountsResponse;
use forum_service::{ReactionService, ServiceContext, ServiceError};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn counts(server: &TestServer, post_id: i64) -> VoteCounts {
    let response = server.get(&votes_path(post_id)).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_vote_scenario() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres().await.unwrap();
    let post = unique_id();
    let (alice, bob) = (unique_id(), unique_id());

    assert_eq!(counts(&server, post).await, VoteCounts::new(0, 0));

    let response = server.post(&vote_path(post), &VoteBody::up(alice)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts(&server, post).await, VoteCounts::new(1, 0));

    let response = server.post(&vote_path(post), &VoteBody::down(alice)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts(&server, post).await, VoteCounts::new(0, 1));

    let response = server.post(&vote_path(post), &VoteBody::up(bob)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts(&server, post).await, VoteCounts::new(1, 1));
}

#[tokio::test]
async fn test_invalid_action_leaves_state_untouched() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres().await.unwrap();
    let post = unique_id();
    let user = unique_id();

    let response = server.post(&vote_path(post), &VoteBody::up(user)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(&vote_path(post), &VoteBody::new(user, "like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(counts(&server, post).await, VoteCounts::new(1, 0));
}

#[tokio::test]
async fn test_concurrent_flips_by_one_user_count_once() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres().await.unwrap();
    let post = unique_id();
    let user = unique_id();

    let requests = (0..20).map(|i| {
        let body = if i % 2 == 0 {
            VoteBody::up(user)
        } else {
            VoteBody::down(user)
        };
        let server = &server;
        async move { server.post(&vote_path(post), &body).await }
    });

    for response in futures::future::join_all(requests).await {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let counts = counts(&server, post).await;
    assert_eq!(counts.upvotes + counts.downvotes, 1);
}

#[tokio::test]
async fn test_submit_timeout_leaves_ledger_untouched() {
    if !check_test_env() {
        return;
    }

    let url = std::env::var("DATABASE_URL").unwrap();
    let pool = PgPool::connect(&url).await.unwrap();
    run_migrations(&pool).await.unwrap();

    let ctx = ServiceContext::new(Arc::new(PgReactionRepository::new(pool.clone())))
        .with_operation_timeout(Duration::from_millis(300));
    let service = ReactionService::new(&ctx);
    let post = EntityId::new(unique_id());
    let user = EntityId::new(unique_id());

    service.submit_reaction(post, user, "up").await.unwrap();

    // Hold the row lock so the flip blocks inside its transaction
    let mut blocker = pool.begin().await.unwrap();
    sqlx::query(
        "SELECT kind FROM post_reactions WHERE user_id = $1 AND target_id = $2 FOR UPDATE",
    )
    .bind(user.into_inner())
    .bind(post.into_inner())
    .fetch_one(&mut *blocker)
    .await
    .unwrap();

    let err = service
        .submit_reaction(post, user, "down")
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            ServiceError::Timeout {
                operation: "submit_reaction",
                ..
            }
        ),
        "unexpected error: {err}"
    );

    blocker.rollback().await.unwrap();

    assert_eq!(
        service.get_aggregate(post).await.unwrap(),
        VoteCountsResponse {
            upvotes: 1,
            downvotes: 0,
        }
    );
    let current = service.get_user_reaction(post, user).await.unwrap();
    assert_eq!(current.kind, Some(ReactionKind::Up));
}
