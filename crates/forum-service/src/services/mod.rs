//! Business logic services
//!
//! Services validate input, call the repository ports held by
//! [`ServiceContext`], and shape results into DTOs.

pub mod context;
pub mod error;
pub mod reaction;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
