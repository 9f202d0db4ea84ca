//! # forum-db
//!
//! Database layer implementing the reaction ledger port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Row ↔ entity mappers
//! - `PgReactionRepository`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::{create_pool, run_migrations, PoolConfig, PgReactionRepository};
//!
//! async fn example(config: &forum_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from(config)).await?;
//!     run_migrations(&pool).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, EmbeddedMigrations, PgPool, PoolConfig};
pub use repositories::PgReactionRepository;
