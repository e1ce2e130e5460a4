//! Feed entity <-> model mapper

use reply_core::entities::Feed;
use reply_core::value_objects::Snowflake;

use crate::models::FeedModel;

impl From<FeedModel> for Feed {
    fn from(model: FeedModel) -> Self {
        Feed {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            // The column has a CHECK >= 0; clamp anyway so a bad row can't go negative
            replies_count: model.replies_count.max(0),
            created_at: model.created_at,
        }
    }
}
