//! # forum-core
//!
//! Domain layer for the post vote ledger: entities, value objects, the
//! repository port, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Reaction, ReactionChange, ReactionKind, ReactionTally};
pub use error::DomainError;
pub use traits::{ReactionRepository, RepoResult};
pub use value_objects::{EntityId, EntityIdParseError};
