//! Domain entities - core business objects

mod reaction;

pub use reaction::{Reaction, ReactionChange, ReactionKind, ReactionTally};
