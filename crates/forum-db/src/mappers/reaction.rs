//! Reaction model -> entity mapper

use forum_core::entities::{Reaction, ReactionKind, ReactionTally};
use forum_core::error::DomainError;
use forum_core::value_objects::EntityId;

use crate::models::{ReactionModel, ReactionTallyModel};

/// Decode the `kind` column
///
/// The table has a CHECK constraint, so anything else means the row was
/// written outside this crate.
pub fn kind_from_column(raw: &str) -> Result<ReactionKind, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::CorruptRecord(format!("unknown reaction kind {raw:?}")))
}

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            user_id: EntityId::new(model.user_id),
            target_id: EntityId::new(model.target_id),
            kind: kind_from_column(&model.kind)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<ReactionTallyModel> for ReactionTally {
    fn from(model: ReactionTallyModel) -> Self {
        ReactionTally::new(model.up_count, model.down_count)
    }
}
