//! Integration test utilities for the forum vote server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, backed either by an in-memory ledger or PostgreSQL.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
pub use memory::{FlakyReactionRepository, InMemoryReactionRepository};
