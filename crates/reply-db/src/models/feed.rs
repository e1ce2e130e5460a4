//! Feed database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for feeds table
#[derive(Debug, Clone, FromRow)]
pub struct FeedModel {
    pub id: i64,
    pub author_id: i64,
    pub replies_count: i64,
    pub created_at: DateTime<Utc>,
}
