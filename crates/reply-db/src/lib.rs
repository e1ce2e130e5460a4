//! # reply-db
//!
//! Persistence layer implementing the reply-core repository ports.
//!
//! - PostgreSQL repositories via SQLx, with reply writes and feed counter
//!   updates sharing one transaction
//! - An in-memory store with the same semantics, for tests and local runs
//!
//! ```rust,ignore
//! use reply_db::{apply_schema, create_pool, DatabaseConfig, PgReplyRepository};
//!
//! let pool = create_pool(&DatabaseConfig::default()).await?;
//! apply_schema(&pool).await?;
//! let replies = PgReplyRepository::new(pool);
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, ping, DatabaseConfig, PgPool};
pub use repositories::{
    PgFeedRepository, PgMemberRepository, PgReplyLikeRepository, PgReplyRepository,
};
pub use schema::apply_schema;
