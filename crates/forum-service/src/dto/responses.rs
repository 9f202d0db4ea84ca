//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use forum_core::entities::{ReactionChange, ReactionKind, ReactionTally};
use forum_core::value_objects::EntityId;
use serde::Serialize;

// ============================================================================
// Vote Responses
// ============================================================================

/// Result of a successful vote submission
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub message: String,
    pub kind: ReactionKind,
}

impl From<ReactionChange> for VoteResponse {
    fn from(change: ReactionChange) -> Self {
        Self {
            message: format!("Post {}voted", change.kind),
            kind: change.kind,
        }
    }
}

/// Vote counts for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteCountsResponse {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl From<ReactionTally> for VoteCountsResponse {
    fn from(tally: ReactionTally) -> Self {
        Self {
            upvotes: tally.up_count,
            downvotes: tally.down_count,
        }
    }
}

/// A single user's current vote on a post
#[derive(Debug, Clone, Serialize)]
pub struct UserVoteResponse {
    pub post_id: EntityId,
    pub user_id: EntityId,
    /// `null` when the user has not voted
    pub kind: Option<ReactionKind>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
