//! Reply service
//!
//! Creation, editing, and deletion of replies by their authors, plus paged
//! listing annotated with the viewer's like status.

use reply_core::entities::{ensure_author, Member, Reply};
use reply_core::traits::ReplyQuery;
use reply_core::{DomainError, Page, PageRequest, Snowflake, Viewer};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{
    CreateReplyRequest, CreatedReplyResponse, ListRepliesQuery, PageResponse, ReplyResponse,
    ReplyWithViewerState, UpdateReplyRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reply service
pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a reply on a feed and bump the feed's reply counter
    #[instrument(skip(self, request))]
    pub async fn create_reply(
        &self,
        feed_id: Snowflake,
        viewer: Viewer,
        request: CreateReplyRequest,
    ) -> ServiceResult<CreatedReplyResponse> {
        let member = self.require_member(viewer).await?;

        self.ctx
            .feed_repo()
            .find_by_id(feed_id)
            .await?
            .ok_or(DomainError::FeedNotFound(feed_id))?;

        request.validate()?;
        Reply::validate_content(&request.content, self.ctx.reply_config().max_content_length)?;

        let reply = Reply::new(self.ctx.generate_id(), feed_id, member.id, request.content);

        // Insert and counter bump commit together
        self.ctx.reply_repo().create(&reply).await?;

        info!(reply_id = %reply.id, feed_id = %feed_id, author_id = %member.id, "Reply created");

        Ok(CreatedReplyResponse {
            reply_id: reply.id.to_string(),
        })
    }

    /// Replace the content of a reply the viewer authored
    #[instrument(skip(self, request))]
    pub async fn update_reply(
        &self,
        reply_id: Snowflake,
        viewer: Viewer,
        request: UpdateReplyRequest,
    ) -> ServiceResult<()> {
        let member = self.require_member(viewer).await?;
        let mut reply = self.find_active_reply(reply_id).await?;

        ensure_author(&reply, member.id).inspect_err(|_| {
            warn!(reply_id = %reply_id, member_id = %member.id, "Update denied: not reply author");
        })?;

        request.validate()?;
        Reply::validate_content(&request.content, self.ctx.reply_config().max_content_length)?;

        reply.edit(request.content)?;
        self.ctx.reply_repo().update_content(&reply).await?;

        info!(reply_id = %reply_id, "Reply updated");

        Ok(())
    }

    /// Tombstone a reply the viewer authored
    ///
    /// The feed counter is only decremented when the policy asks for it.
    #[instrument(skip(self))]
    pub async fn delete_reply(&self, reply_id: Snowflake, viewer: Viewer) -> ServiceResult<()> {
        let member = self.require_member(viewer).await?;
        let reply = self.find_active_reply(reply_id).await?;

        ensure_author(&reply, member.id).inspect_err(|_| {
            warn!(reply_id = %reply_id, member_id = %member.id, "Delete denied: not reply author");
        })?;

        let decrement = self.ctx.reply_config().decrement_on_delete;
        let tombstoned = self.ctx.reply_repo().tombstone(reply_id, decrement).await?;
        if !tombstoned {
            // Lost a race with a concurrent delete
            return Err(DomainError::ReplyNotFound(reply_id).into());
        }

        info!(reply_id = %reply_id, feed_id = %reply.feed_id, decrement, "Reply deleted");

        Ok(())
    }

    /// List one page of a feed's replies in creation order
    ///
    /// Anonymous viewers are allowed and never see a reply as liked. An
    /// authenticated viewer must still resolve to a member.
    #[instrument(skip(self))]
    pub async fn list_replies(
        &self,
        feed_id: Snowflake,
        viewer: Viewer,
        query: ListRepliesQuery,
    ) -> ServiceResult<PageResponse<ReplyResponse>> {
        if let Viewer::Authenticated(member_id) = viewer {
            self.ctx
                .member_repo()
                .find_by_id(member_id)
                .await?
                .ok_or(DomainError::Unauthenticated)?;
        }

        self.ctx
            .feed_repo()
            .find_by_id(feed_id)
            .await?
            .ok_or(DomainError::FeedNotFound(feed_id))?;

        let config = self.ctx.reply_config();
        let page_request = PageRequest::clamped(
            query.page.unwrap_or(0),
            query.size.unwrap_or(config.default_page_size),
            config.max_page_size,
        );
        let reply_query = ReplyQuery {
            page: page_request,
            include_deleted: config.tombstone_visibility.includes_deleted(),
        };

        let page = self.ctx.reply_repo().find_by_feed(feed_id, reply_query).await?;
        let total_elements = page.total_elements;

        let mut annotated = Vec::with_capacity(page.content.len());
        for reply in page.content {
            let liked_by_viewer = self.liked_by(viewer, reply.id).await?;
            annotated.push(ReplyWithViewerState {
                reply,
                liked_by_viewer,
            });
        }
        let page = Page::new(annotated, page_request, total_elements);

        debug!(
            feed_id = %feed_id,
            returned = page.content.len(),
            total = page.total_elements,
            "Replies listed"
        );

        Ok(page.into())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Resolve the viewer to a member, or fail
    async fn require_member(&self, viewer: Viewer) -> ServiceResult<Member> {
        let member_id = viewer.require_authenticated()?;

        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::MemberNotFound(member_id)))
    }

    /// Like status of one reply for the viewer; anonymous viewers skip the lookup
    async fn liked_by(&self, viewer: Viewer, reply_id: Snowflake) -> ServiceResult<bool> {
        match viewer {
            Viewer::Anonymous => Ok(false),
            Viewer::Authenticated(member_id) => Ok(self
                .ctx
                .reply_like_repo()
                .exists(member_id, reply_id)
                .await?),
        }
    }

    /// Load a reply that is still a valid mutation target
    async fn find_active_reply(&self, reply_id: Snowflake) -> ServiceResult<Reply> {
        self.ctx
            .reply_repo()
            .find_by_id(reply_id)
            .await?
            .filter(Reply::is_active)
            .ok_or_else(|| ServiceError::from(DomainError::ReplyNotFound(reply_id)))
    }
}
