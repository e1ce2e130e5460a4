//! Viewer - the identity a request is made on behalf of

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Who is asking
///
/// Anonymous viewers may read replies but never see a liked flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    Authenticated(Snowflake),
}

impl Viewer {
    #[inline]
    pub fn member_id(&self) -> Option<Snowflake> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(id) => Some(*id),
        }
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Member id of an authenticated viewer, otherwise `Unauthenticated`
    pub fn require_authenticated(&self) -> Result<Snowflake, DomainError> {
        self.member_id().ok_or(DomainError::Unauthenticated)
    }
}

impl From<Option<Snowflake>> for Viewer {
    fn from(member_id: Option<Snowflake>) -> Self {
        member_id.map_or(Self::Anonymous, Self::Authenticated)
    }
}
