//! Feed entity - a post that replies attach to

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Feed post entity
///
/// `replies_count` is a denormalized cache owned by the feed. Persistence
/// layers must change it with an atomic increment, never read-modify-write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub replies_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Feed {
    /// Create a new Feed with no replies
    pub fn new(id: Snowflake, author_id: Snowflake) -> Self {
        Self {
            id,
            author_id,
            replies_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Apply a counter delta, flooring at zero
    pub fn apply_replies_delta(&mut self, delta: i64) {
        self.replies_count = (self.replies_count + delta).max(0);
    }

    /// Check whether the feed has any replies recorded
    #[inline]
    pub fn has_replies(&self) -> bool {
        self.replies_count > 0
    }
}
