//! # forum-service
//!
//! Application layer containing the vote use cases and their DTOs.

pub mod dto;
pub mod services;

pub use services::{ReactionService, ServiceContext, ServiceError, ServiceResult};
