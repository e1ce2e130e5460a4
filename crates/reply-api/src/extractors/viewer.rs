//! Viewer extractor
//!
//! Resolves the `Authorization: Bearer` header into a [`Viewer`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejectionReason,
    TypedHeader,
};
use reply_common::AppError;
use reply_core::Viewer;

use crate::response::ApiError;
use crate::state::AppState;

/// Viewer behind the request
///
/// No `Authorization` header resolves to [`Viewer::Anonymous`]. A header
/// that is present but malformed, expired, or signed with another key is
/// rejected with 401 rather than downgraded to anonymous.
#[derive(Debug, Clone, Copy)]
pub struct ViewerContext(pub Viewer);

#[async_trait]
impl<S> FromRequestParts<S> for ViewerContext
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        let bearer = match header {
            Ok(TypedHeader(Authorization(bearer))) => bearer,
            Err(rejection) if matches!(rejection.reason(), TypedHeaderRejectionReason::Missing) => {
                return Ok(ViewerContext(Viewer::Anonymous));
            }
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Malformed authorization header");
                return Err(AppError::InvalidToken.into());
            }
        };

        let app_state = AppState::from_ref(state);
        let viewer = app_state
            .jwt_service()
            .viewer_for_token(bearer.token())
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected access token"))?;

        Ok(ViewerContext(viewer))
    }
}
