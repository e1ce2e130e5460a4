//! Member entity - an account that authors replies and likes them

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Member entity
///
/// Members are created and destroyed by the account subsystem; the reply
/// subsystem only looks them up to confirm a viewer is a real account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Snowflake,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member
    pub fn new(id: Snowflake, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            created_at: Utc::now(),
        }
    }
}
