//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use reply_core::entities::Reply;
use reply_core::traits::{ReplyQuery, ReplyRepository, RepoResult};
use reply_core::value_objects::{Page, Snowflake};

use crate::mappers::ReplyInsert;
use crate::models::ReplyModel;

use super::error::{feed_not_found, map_db_error, map_reply_insert_error, reply_not_found};
use super::feed::adjust_replies_count;

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, feed_id, author_id, content, deleted, created_at, updated_at
            FROM replies
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn find_by_feed(&self, feed_id: Snowflake, query: ReplyQuery) -> RepoResult<Page<Reply>> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM replies
            WHERE feed_id = $1 AND ($2 OR deleted = FALSE)
            "#,
        )
        .bind(feed_id.into_inner())
        .bind(query.include_deleted)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, feed_id, author_id, content, deleted, created_at, updated_at
            FROM replies
            WHERE feed_id = $1 AND ($2 OR deleted = FALSE)
            ORDER BY id ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(feed_id.into_inner())
        .bind(query.include_deleted)
        .bind(query.page.limit() as i64)
        .bind(query.page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Reply::from).collect(),
            query.page,
            total.max(0) as u64,
        ))
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id, feed_id = %reply.feed_id))]
    async fn create(&self, reply: &Reply) -> RepoResult<()> {
        let insert = ReplyInsert::new(reply);
        let feed_id = reply.feed_id;

        // Dropping the transaction on any early return rolls it back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO replies (id, feed_id, author_id, content, deleted, created_at)
            VALUES ($1, $2, $3, $4, FALSE, $5)
            "#,
        )
        .bind(insert.id)
        .bind(insert.feed_id)
        .bind(insert.author_id)
        .bind(insert.content)
        .bind(reply.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_reply_insert_error(e, feed_id, reply.author_id))?;

        let touched = adjust_replies_count(&mut *tx, feed_id, 1)
            .await
            .map_err(map_db_error)?;
        if touched == 0 {
            return Err(feed_not_found(feed_id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id))]
    async fn update_content(&self, reply: &Reply) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE replies
            SET content = $2, updated_at = $3
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(reply.id.into_inner())
        .bind(&reply.content)
        .bind(reply.updated_at.unwrap_or_else(Utc::now))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(reply.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn tombstone(&self, id: Snowflake, decrement_feed: bool) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let feed_id = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE replies
            SET deleted = TRUE
            WHERE id = $1 AND deleted = FALSE
            RETURNING feed_id
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(feed_id) = feed_id else {
            return Ok(false);
        };

        if decrement_feed {
            adjust_replies_count(&mut *tx, Snowflake::new(feed_id), -1)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }
}
