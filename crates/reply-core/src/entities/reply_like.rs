//! ReplyLike entity - a member's like on a reply

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Like relation between a member and a reply
///
/// Read-only from the reply subsystem's perspective; only existence is queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyLike {
    pub member_id: Snowflake,
    pub reply_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl ReplyLike {
    /// Create a new ReplyLike
    pub fn new(member_id: Snowflake, reply_id: Snowflake) -> Self {
        Self {
            member_id,
            reply_id,
            created_at: Utc::now(),
        }
    }

    /// Check if this like matches the (member, reply) pair
    #[inline]
    pub fn matches(&self, member_id: Snowflake, reply_id: Snowflake) -> bool {
        self.member_id == member_id && self.reply_id == reply_id
    }
}
