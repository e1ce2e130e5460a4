//! Pagination extractor
//!
//! Reads `?page=&size=` into a [`ListRepliesQuery`]. Clamping against the
//! configured limits happens in the service.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use reply_service::dto::ListRepliesQuery;

use crate::response::ApiError;

/// Page index and size from the query string
#[derive(Debug, Clone, Copy, Default)]
pub struct PageParams(pub ListRepliesQuery);

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListRepliesQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(PageParams(query))
    }
}
