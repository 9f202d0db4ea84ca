//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

/// Get an id no other test in this run (or an earlier run) has used
///
/// Seeded from the clock so rows left in a shared database never collide.
pub fn unique_id() -> i64 {
    static COUNTER: OnceLock<AtomicI64> = OnceLock::new();
    COUNTER
        .get_or_init(|| AtomicI64::new(chrono::Utc::now().timestamp_micros()))
        .fetch_add(1, Ordering::SeqCst)
}

/// Vote request body
#[derive(Debug, Clone, Serialize)]
pub struct VoteBody {
    pub user_id: i64,
    pub action: String,
}

impl VoteBody {
    pub fn up(user_id: i64) -> Self {
        Self::new(user_id, "up")
    }

    pub fn down(user_id: i64) -> Self {
        Self::new(user_id, "down")
    }

    pub fn new(user_id: i64, action: &str) -> Self {
        Self {
            user_id,
            action: action.to_string(),
        }
    }
}

/// Vote submission response
#[derive(Debug, Deserialize)]
pub struct VoteResult {
    pub message: String,
    pub kind: String,
}

/// Vote counts response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VoteCounts {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteCounts {
    pub fn new(upvotes: i64, downvotes: i64) -> Self {
        Self { upvotes, downvotes }
    }
}

/// Single user vote response
#[derive(Debug, Deserialize)]
pub struct UserVote {
    pub post_id: i64,
    pub user_id: i64,
    pub kind: Option<String>,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Paths for a post's vote endpoints
pub fn vote_path(post_id: i64) -> String {
    format!("/posts/{post_id}/vote")
}

pub fn votes_path(post_id: i64) -> String {
    format!("/posts/{post_id}/votes")
}

pub fn user_vote_path(post_id: i64, user_id: i64) -> String {
    format!("/posts/{post_id}/votes/{user_id}")
}
