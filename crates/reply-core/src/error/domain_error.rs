//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Authentication required")]
    Unauthenticated,

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(Snowflake),

    #[error("Feed not found: {0}")]
    FeedNotFound(Snowflake),

    #[error("Reply not found: {0}")]
    ReplyNotFound(Snowflake),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not reply author")]
    AccessDenied,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",

            // Not Found
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::FeedNotFound(_) => "UNKNOWN_FEED",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",

            // Authorization
            Self::AccessDenied => "ACCESS_DENIED",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Infrastructure
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is an authentication error
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_) | Self::FeedNotFound(_) | Self::ReplyNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ContentTooLong { .. })
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }

    /// Check if the failure is transient and the caller may retry
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }

    /// HTTP-style status for this error
    pub fn status_code(&self) -> u16 {
        if self.is_unauthenticated() {
            401
        } else if self.is_authorization() {
            403
        } else if self.is_not_found() {
            404
        } else if self.is_validation() {
            400
        } else if self.is_transient() {
            503
        } else {
            500
        }
    }
}
