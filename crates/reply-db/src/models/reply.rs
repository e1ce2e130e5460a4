//! Reply database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: i64,
    pub feed_id: i64,
    pub author_id: i64,
    pub content: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReplyModel {
    /// Check if reply has been edited
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }
}
