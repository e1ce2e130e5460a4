//! Reply handlers
//!
//! Endpoints for creating, editing, deleting, and listing feed replies.

use axum::{extract::State, Json};
use reply_service::dto::{
    CreateReplyRequest, CreatedReplyResponse, PageResponse, ReplyResponse, UpdateReplyRequest,
};
use reply_service::ReplyService;

use crate::extractors::{FeedIdPath, JsonBody, PageParams, ReplyIdPath, ViewerContext};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create reply
///
/// POST /feeds/{feed_id}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    ViewerContext(viewer): ViewerContext,
    FeedIdPath(feed_id): FeedIdPath,
    JsonBody(request): JsonBody<CreateReplyRequest>,
) -> ApiResult<Created<Json<CreatedReplyResponse>>> {
    let service = ReplyService::new(state.service_context());
    let response = service.create_reply(feed_id, viewer, request).await?;
    Ok(Created(Json(response)))
}

/// List replies, anonymous viewers allowed
///
/// GET /feeds/{feed_id}/replies?page=&size=
pub async fn list_replies(
    State(state): State<AppState>,
    ViewerContext(viewer): ViewerContext,
    FeedIdPath(feed_id): FeedIdPath,
    PageParams(query): PageParams,
) -> ApiResult<Json<PageResponse<ReplyResponse>>> {
    let service = ReplyService::new(state.service_context());
    let page = service.list_replies(feed_id, viewer, query).await?;
    Ok(Json(page))
}

/// Edit reply content
///
/// PATCH /replies/{reply_id}
pub async fn update_reply(
    State(state): State<AppState>,
    ViewerContext(viewer): ViewerContext,
    ReplyIdPath(reply_id): ReplyIdPath,
    JsonBody(request): JsonBody<UpdateReplyRequest>,
) -> ApiResult<NoContent> {
    let service = ReplyService::new(state.service_context());
    service.update_reply(reply_id, viewer, request).await?;
    Ok(NoContent)
}

/// Delete (tombstone) reply
///
/// DELETE /replies/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    ViewerContext(viewer): ViewerContext,
    ReplyIdPath(reply_id): ReplyIdPath,
) -> ApiResult<NoContent> {
    let service = ReplyService::new(state.service_context());
    service.delete_reply(reply_id, viewer).await?;
    Ok(NoContent)
}
