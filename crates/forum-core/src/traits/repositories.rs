//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Reaction, ReactionChange, ReactionKind, ReactionTally};
use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

/// Storage for the exclusive-reaction ledger.
///
/// Implementations must keep at most one reaction per (user, target) pair.
/// `submit` is all-or-nothing: either the pair ends up holding `kind`, or it
/// keeps whatever it held before the call.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the current reaction of a user on a target
    async fn find(&self, user_id: EntityId, target_id: EntityId) -> RepoResult<Option<Reaction>>;

    /// Replace any opposing reaction with `kind` for the pair, atomically
    async fn submit(
        &self,
        user_id: EntityId,
        target_id: EntityId,
        kind: ReactionKind,
    ) -> RepoResult<ReactionChange>;

    /// Count current reactions of each kind on a target
    async fn tally(&self, target_id: EntityId) -> RepoResult<ReactionTally>;

    /// Check that storage is reachable
    async fn ping(&self) -> RepoResult<()>;
}
