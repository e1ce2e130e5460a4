//! Reply entity <-> model mapper

use reply_core::entities::Reply;
use reply_core::value_objects::Snowflake;

use crate::models::ReplyModel;

impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: Snowflake::new(model.id),
            feed_id: Snowflake::new(model.feed_id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            deleted: model.deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values of a new reply row
pub struct ReplyInsert<'a> {
    pub id: i64,
    pub feed_id: i64,
    pub author_id: i64,
    pub content: &'a str,
}

impl<'a> ReplyInsert<'a> {
    pub fn new(reply: &'a Reply) -> Self {
        Self {
            id: reply.id.into_inner(),
            feed_id: reply.feed_id.into_inner(),
            author_id: reply.author_id.into_inner(),
            content: &reply.content,
        }
    }
}
