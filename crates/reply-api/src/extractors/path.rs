//! Path parameter extractors
//!
//! Snowflake ids arrive as decimal strings and are parsed here so a bad id
//! is a 400 with a useful message instead of a routing miss.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use reply_core::Snowflake;

use crate::response::ApiError;

/// `/feeds/:feed_id/...`
#[derive(Debug, Clone, Copy)]
pub struct FeedIdPath(pub Snowflake);

/// `/replies/:reply_id`
#[derive(Debug, Clone, Copy)]
pub struct ReplyIdPath(pub Snowflake);

async fn snowflake_param<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
    name: &str,
) -> Result<Snowflake, ApiError> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.to_string()))?;

    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

#[async_trait]
impl<S> FromRequestParts<S> for FeedIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        snowflake_param(parts, state, "feed_id").await.map(FeedIdPath)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ReplyIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        snowflake_param(parts, state, "reply_id").await.map(ReplyIdPath)
    }
}
