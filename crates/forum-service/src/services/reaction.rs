//! Reaction service
//!
//! Handles post votes: submit an up/down reaction and read the aggregate.

use std::future::Future;

use forum_core::entities::ReactionKind;
use forum_core::traits::RepoResult;
use forum_core::value_objects::EntityId;
use tracing::{debug, info, instrument, warn};

use crate::dto::{UserVoteResponse, VoteCountsResponse, VoteResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record `user_id`'s reaction on `target_id`, replacing any opposite one
    ///
    /// Input is fully validated before storage is touched, so a rejected
    /// submit never changes the ledger.
    #[instrument(skip(self))]
    pub async fn submit_reaction(
        &self,
        target_id: EntityId,
        user_id: EntityId,
        action: &str,
    ) -> ServiceResult<VoteResponse> {
        require_id("post_id", target_id)?;
        require_id("user_id", user_id)?;
        let kind: ReactionKind = action.parse()?;

        let change = self
            .bounded(
                "submit_reaction",
                self.ctx.reaction_repo().submit(user_id, target_id, kind),
            )
            .await?;

        if change.is_unchanged() {
            debug!(
                post_id = %target_id,
                user_id = %user_id,
                kind = %kind,
                "Reaction already recorded"
            );
        } else {
            info!(
                post_id = %target_id,
                user_id = %user_id,
                kind = %kind,
                previous = ?change.previous,
                "Reaction recorded"
            );
        }

        Ok(change.into())
    }

    /// Current up/down counts for a target
    #[instrument(skip(self))]
    pub async fn get_aggregate(&self, target_id: EntityId) -> ServiceResult<VoteCountsResponse> {
        require_id("post_id", target_id)?;

        let tally = self
            .bounded("get_aggregate", self.ctx.reaction_repo().tally(target_id))
            .await?;

        Ok(tally.into())
    }

    /// A single user's current reaction on a target, if any
    #[instrument(skip(self))]
    pub async fn get_user_reaction(
        &self,
        target_id: EntityId,
        user_id: EntityId,
    ) -> ServiceResult<UserVoteResponse> {
        require_id("post_id", target_id)?;
        require_id("user_id", user_id)?;

        let reaction = self
            .bounded(
                "get_user_reaction",
                self.ctx.reaction_repo().find(user_id, target_id),
            )
            .await?;

        Ok(UserVoteResponse {
            post_id: target_id,
            user_id,
            kind: reaction.map(|r| r.kind),
        })
    }

    /// Whether the ledger's storage currently answers
    #[instrument(skip(self))]
    pub async fn storage_ready(&self) -> bool {
        match self.bounded("ping", self.ctx.reaction_repo().ping()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Storage readiness check failed");
                false
            }
        }
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Run a storage call under the context's operation timeout
    ///
    /// A call cut short is dropped, which rolls back any open transaction.
    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> ServiceResult<T>
    where
        F: Future<Output = RepoResult<T>>,
    {
        let after = self.ctx.operation_timeout();
        match tokio::time::timeout(after, call).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!(operation, timeout_ms = after.as_millis() as u64, "Storage call timed out");
                Err(ServiceError::Timeout { operation, after })
            }
        }
    }
}

fn require_id(field: &str, id: EntityId) -> ServiceResult<()> {
    if id.is_valid() {
        Ok(())
    } else {
        Err(ServiceError::invalid_argument(format!(
            "{field} must be a positive integer, got {id}"
        )))
    }
}
