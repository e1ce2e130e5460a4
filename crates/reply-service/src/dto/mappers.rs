//! Entity to DTO mappers

use reply_core::entities::Reply;
use reply_core::value_objects::Page;

use super::responses::{PageResponse, ReplyResponse};

/// A reply paired with the requesting viewer's like status
#[derive(Debug, Clone)]
pub struct ReplyWithViewerState {
    pub reply: Reply,
    pub liked_by_viewer: bool,
}

impl From<ReplyWithViewerState> for ReplyResponse {
    fn from(data: ReplyWithViewerState) -> Self {
        let reply = data.reply;
        Self {
            reply_id: reply.id.to_string(),
            feed_id: reply.feed_id.to_string(),
            author_id: reply.author_id.to_string(),
            content: reply.visible_content().to_string(),
            liked_by_viewer: data.liked_by_viewer,
            deleted: reply.deleted,
            created_at: reply.created_at,
            updated_at: reply.updated_at,
        }
    }
}

impl<T, U> From<Page<T>> for PageResponse<U>
where
    U: From<T>,
{
    fn from(page: Page<T>) -> Self {
        Self {
            content: page.content.into_iter().map(U::from).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
