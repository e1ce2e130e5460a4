//! # reply-core
//!
//! Domain layer for feed replies: entities, value objects, the error taxonomy,
//! and the repository ports the engagement service consumes.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ensure_author, Authored, Feed, Member, Reply, ReplyLike, ReplyState, DELETED_PLACEHOLDER,
};
pub use error::DomainError;
pub use traits::{
    FeedRepository, MemberRepository, ReplyLikeRepository, ReplyQuery, ReplyRepository,
    RepoResult,
};
pub use value_objects::{
    Page, PageRequest, Snowflake, SnowflakeGenerator, SnowflakeParseError, TombstoneVisibility,
    Viewer,
};
