//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use forum_core::value_objects::EntityId;
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Vote Requests
// ============================================================================

/// Cast or change a vote on a post
///
/// `action` stays a raw string here; turning it into a reaction kind is the
/// service's job so that an unknown action surfaces as an invalid argument.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VoteRequest {
    #[validate(custom(function = "validate_entity_id"))]
    pub user_id: EntityId,

    pub action: String,
}

fn validate_entity_id(id: &EntityId) -> Result<(), ValidationError> {
    if id.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::new("entity_id")
            .with_message("Identifier must be a positive integer".into()))
    }
}
