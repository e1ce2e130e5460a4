//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer states what it needs; `reply-db` provides PostgreSQL and
//! in-memory implementations.

use async_trait::async_trait;

use crate::entities::{Feed, Member, Reply};
use crate::error::DomainError;
use crate::value_objects::{Page, PageRequest, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Member>>;
}

// ============================================================================
// Feed Repository
// ============================================================================

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Find feed by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Feed>>;

    /// Atomically add `delta` to the feed's reply counter, flooring at zero.
    ///
    /// Returns `FeedNotFound` if no row was touched.
    async fn increment_replies_count(&self, id: Snowflake, delta: i64) -> RepoResult<()>;
}

// ============================================================================
// Reply Repository
// ============================================================================

/// Query options for listing the replies of one feed
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyQuery {
    pub page: PageRequest,
    /// Return tombstoned replies as well as active ones
    pub include_deleted: bool,
}

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Find reply by ID, tombstoned or not
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reply>>;

    /// One page of a feed's replies, ordered by id ascending
    async fn find_by_feed(&self, feed_id: Snowflake, query: ReplyQuery) -> RepoResult<Page<Reply>>;

    /// Persist a new reply and bump its feed's counter by one.
    ///
    /// Both writes commit together or not at all.
    async fn create(&self, reply: &Reply) -> RepoResult<()>;

    /// Replace the content of an active reply and set `updated_at`
    async fn update_content(&self, reply: &Reply) -> RepoResult<()>;

    /// Tombstone an active reply, optionally decrementing its feed's counter
    /// in the same unit of work.
    ///
    /// Returns `false` if the reply was missing or already tombstoned.
    async fn tombstone(&self, id: Snowflake, decrement_feed: bool) -> RepoResult<bool>;
}

// ============================================================================
// Reply Like Repository
// ============================================================================

#[async_trait]
pub trait ReplyLikeRepository: Send + Sync {
    /// Check whether `member_id` has liked `reply_id`
    async fn exists(&self, member_id: Snowflake, reply_id: Snowflake) -> RepoResult<bool>;
}
