//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for post_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: i64,
    pub target_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-kind counts for one target (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionTallyModel {
    pub up_count: i64,
    pub down_count: i64,
}
