//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use forum_core::entities::{Reaction, ReactionChange, ReactionKind, ReactionTally};
use forum_core::traits::{ReactionRepository, RepoResult};
use forum_core::value_objects::EntityId;

use crate::mappers::kind_from_column;
use crate::models::{ReactionModel, ReactionTallyModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: EntityId, target_id: EntityId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT user_id, target_id, kind, created_at, updated_at
            FROM post_reactions
            WHERE user_id = $1 AND target_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn submit(
        &self,
        user_id: EntityId,
        target_id: EntityId,
        kind: ReactionKind,
    ) -> RepoResult<ReactionChange> {
        // Dropping the transaction on any early return rolls it back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the pair's row (if any) so concurrent submits for it serialize
        let previous = sqlx::query_scalar::<_, String>(
            r#"
            SELECT kind
            FROM post_reactions
            WHERE user_id = $1 AND target_id = $2
            FOR UPDATE
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .as_deref()
        .map(kind_from_column)
        .transpose()?;

        // The primary key on (user_id, target_id) turns a racing first insert
        // into an update instead of a second row
        sqlx::query(
            r#"
            INSERT INTO post_reactions (user_id, target_id, kind, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (user_id, target_id) DO UPDATE
            SET kind = EXCLUDED.kind, updated_at = EXCLUDED.updated_at
            WHERE post_reactions.kind <> EXCLUDED.kind
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .bind(kind.as_str())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let change = ReactionChange::new(kind, previous);
        debug!(
            created = change.is_created(),
            flipped = change.is_flipped(),
            "Reaction stored"
        );
        Ok(change)
    }

    #[instrument(skip(self))]
    async fn tally(&self, target_id: EntityId) -> RepoResult<ReactionTally> {
        // One statement, one snapshot: both counts come from the same read
        let result = sqlx::query_as::<_, ReactionTallyModel>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE kind = 'up')   AS up_count,
                COUNT(*) FILTER (WHERE kind = 'down') AS down_count
            FROM post_reactions
            WHERE target_id = $1
            "#,
        )
        .bind(target_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
