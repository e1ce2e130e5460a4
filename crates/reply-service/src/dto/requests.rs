//! Request DTOs for API endpoints
//!
//! Request bodies implement `Deserialize` and `Validate`. The length bound
//! here is a coarse guard; the service enforces the configured maximum.

use serde::Deserialize;
use validator::Validate;

/// Hard ceiling on request content, regardless of configuration
pub const MAX_REQUEST_CONTENT_CHARS: u64 = 10_000;

/// Create reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(
        min = 1,
        max = MAX_REQUEST_CONTENT_CHARS,
        message = "Reply content must not be empty or exceed the request limit"
    ))]
    pub content: String,
}

/// Update reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReplyRequest {
    #[validate(length(
        min = 1,
        max = MAX_REQUEST_CONTENT_CHARS,
        message = "Reply content must not be empty or exceed the request limit"
    ))]
    pub content: String,
}

/// Paging parameters for listing replies
///
/// Missing values fall back to the configured defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListRepliesQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}
