//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{ReactionRepository, RepoResult};
