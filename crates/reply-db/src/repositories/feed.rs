//! PostgreSQL implementation of FeedRepository

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::instrument;

use reply_core::entities::Feed;
use reply_core::traits::{FeedRepository, RepoResult};
use reply_core::value_objects::Snowflake;

use crate::models::FeedModel;

use super::error::{feed_not_found, map_db_error};

/// PostgreSQL implementation of FeedRepository
#[derive(Clone)]
pub struct PgFeedRepository {
    pool: PgPool,
}

impl PgFeedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Add `delta` to a feed's counter in a single statement, flooring at zero.
///
/// Runs on any executor so reply writes can include it in their transaction.
/// Returns the number of rows touched.
pub(crate) async fn adjust_replies_count<'e, E>(
    executor: E,
    feed_id: Snowflake,
    delta: i64,
) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        UPDATE feeds
        SET replies_count = GREATEST(replies_count + $2, 0)
        WHERE id = $1
        "#,
    )
    .bind(feed_id.into_inner())
    .bind(delta)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

#[async_trait]
impl FeedRepository for PgFeedRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Feed>> {
        let result = sqlx::query_as::<_, FeedModel>(
            r#"
            SELECT id, author_id, replies_count, created_at
            FROM feeds
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Feed::from))
    }

    #[instrument(skip(self))]
    async fn increment_replies_count(&self, id: Snowflake, delta: i64) -> RepoResult<()> {
        let touched = adjust_replies_count(&self.pool, id, delta)
            .await
            .map_err(map_db_error)?;

        if touched == 0 {
            return Err(feed_not_found(id));
        }

        Ok(())
    }
}
