//! Reply entity - a comment authored by a member on a feed post

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Placeholder shown in place of a tombstoned reply's content
pub const DELETED_PLACEHOLDER: &str = "[deleted]";

/// Lifecycle state of a reply
///
/// `Active --edit--> Active`, `Active --tombstone--> Deleted`.
/// `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Active,
    Deleted,
}

/// Reply entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: Snowflake,
    pub feed_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reply {
    /// Create a new active Reply
    pub fn new(id: Snowflake, feed_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            feed_id,
            author_id,
            content,
            deleted: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> ReplyState {
        if self.deleted {
            ReplyState::Deleted
        } else {
            ReplyState::Active
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Check if the reply has been edited since creation
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Replace the content. Author and feed never change.
    ///
    /// Fails with `ReplyNotFound` once the reply is tombstoned.
    pub fn edit(&mut self, content: String) -> Result<(), DomainError> {
        if self.deleted {
            return Err(DomainError::ReplyNotFound(self.id));
        }
        self.content = content;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Mark the reply as deleted, keeping content and author for audit
    pub fn tombstone(&mut self) -> Result<(), DomainError> {
        if self.deleted {
            return Err(DomainError::ReplyNotFound(self.id));
        }
        self.deleted = true;
        Ok(())
    }

    /// Content as it should be shown to readers
    pub fn visible_content(&self) -> &str {
        if self.deleted {
            DELETED_PLACEHOLDER
        } else {
            &self.content
        }
    }

    /// Validate reply content against the configured maximum length
    ///
    /// Whitespace-only content is rejected. Length is counted in characters.
    pub fn validate_content(content: &str, max_len: usize) -> Result<(), DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Reply content must not be empty".to_string(),
            ));
        }
        if content.chars().count() > max_len {
            return Err(DomainError::ContentTooLong { max: max_len });
        }
        Ok(())
    }
}

/// Entities with an immutable author
pub trait Authored {
    fn author_id(&self) -> Snowflake;

    /// Check if the given member authored this entity
    fn is_authored_by(&self, member_id: Snowflake) -> bool {
        self.author_id() == member_id
    }
}

impl Authored for Reply {
    fn author_id(&self) -> Snowflake {
        self.author_id
    }
}

/// Require that `member_id` authored `entity`, otherwise `AccessDenied`
pub fn ensure_author<T: Authored>(entity: &T, member_id: Snowflake) -> Result<(), DomainError> {
    if entity.is_authored_by(member_id) {
        Ok(())
    } else {
        Err(DomainError::AccessDenied)
    }
}
