//! SQL schema for the reply tables
//!
//! Members and feeds are owned by other subsystems; their tables are declared
//! here with only the columns this service reads or writes.

use sqlx::PgPool;
use tracing::info;

/// Foreign key from `replies.feed_id` to `feeds`
pub const REPLY_FEED_FK: &str = "replies_feed_id_fkey";

/// Foreign key from `replies.author_id` to `members`
pub const REPLY_AUTHOR_FK: &str = "replies_author_id_fkey";

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS members (
    id          BIGINT PRIMARY KEY,
    nickname    TEXT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS feeds (
    id             BIGINT PRIMARY KEY,
    author_id      BIGINT NOT NULL REFERENCES members(id),
    replies_count  BIGINT NOT NULL DEFAULT 0 CHECK (replies_count >= 0),
    created_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS replies (
    id          BIGINT PRIMARY KEY,
    feed_id     BIGINT NOT NULL CONSTRAINT replies_feed_id_fkey REFERENCES feeds(id),
    author_id   BIGINT NOT NULL CONSTRAINT replies_author_id_fkey REFERENCES members(id),
    content     TEXT NOT NULL,
    deleted     BOOLEAN NOT NULL DEFAULT FALSE,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at  TIMESTAMPTZ
);

CREATE INDEX IF NOT EXISTS idx_replies_feed ON replies(feed_id, id);

CREATE TABLE IF NOT EXISTS reply_likes (
    member_id   BIGINT NOT NULL REFERENCES members(id),
    reply_id    BIGINT NOT NULL REFERENCES replies(id),
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (member_id, reply_id)
);
"#;

/// Create any missing tables and indexes
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema applied");
    Ok(())
}
