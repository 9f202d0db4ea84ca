//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.

mod error;
mod reaction;

pub use reaction::PgReactionRepository;
