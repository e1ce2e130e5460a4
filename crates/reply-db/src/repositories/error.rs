//! Error handling utilities for repositories

use reply_core::error::DomainError;
use reply_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

use crate::schema::{REPLY_AUTHOR_FK, REPLY_FEED_FK};

/// Convert SQLx error to DomainError
///
/// Connectivity failures become `StorageUnavailable` so callers can tell a
/// transient outage from a broken query.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
            DomainError::StorageUnavailable(e.to_string())
        }
        other => DomainError::DatabaseError(other.to_string()),
    }
}

/// Map a failed reply insert
///
/// A foreign key violation means the feed or the author vanished after the
/// lookup; the violated constraint says which.
pub fn map_reply_insert_error(e: SqlxError, feed_id: Snowflake, author_id: Snowflake) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            if let Some(missing) = reply_fk_target(db_err.constraint(), feed_id, author_id) {
                return missing;
            }
        }
    }
    map_db_error(e)
}

fn reply_fk_target(
    constraint: Option<&str>,
    feed_id: Snowflake,
    author_id: Snowflake,
) -> Option<DomainError> {
    match constraint {
        Some(REPLY_FEED_FK) => Some(feed_not_found(feed_id)),
        Some(REPLY_AUTHOR_FK) => Some(DomainError::MemberNotFound(author_id)),
        _ => None,
    }
}

pub fn feed_not_found(id: Snowflake) -> DomainError {
    DomainError::FeedNotFound(id)
}

pub fn reply_not_found(id: Snowflake) -> DomainError {
    DomainError::ReplyNotFound(id)
}
