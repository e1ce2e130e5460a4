//! PostgreSQL implementation of ReplyLikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reply_core::traits::{ReplyLikeRepository, RepoResult};
use reply_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of ReplyLikeRepository
#[derive(Clone)]
pub struct PgReplyLikeRepository {
    pool: PgPool,
}

impl PgReplyLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyLikeRepository for PgReplyLikeRepository {
    #[instrument(skip(self))]
    async fn exists(&self, member_id: Snowflake, reply_id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reply_likes
                WHERE member_id = $1 AND reply_id = $2
            )
            "#,
        )
        .bind(member_id.into_inner())
        .bind(reply_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
