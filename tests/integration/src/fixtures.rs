//! Test fixtures and wire types
//!
//! Seed data for the in-memory store and the JSON shapes the API speaks.

use reply_core::entities::{Feed, Member, ReplyLike};
use reply_core::Snowflake;
use reply_db::InMemoryStore;
use serde::{Deserialize, Serialize};

/// Two members and one feed authored by the first
#[derive(Debug, Clone, Copy)]
pub struct Community {
    pub m1: Snowflake,
    pub m2: Snowflake,
    pub feed_id: Snowflake,
}

impl Community {
    pub fn seed(store: &InMemoryStore) -> Self {
        let community = Self {
            m1: Snowflake::new(1001),
            m2: Snowflake::new(1002),
            feed_id: Snowflake::new(5001),
        };
        store.insert_member(Member::new(community.m1, "m1"));
        store.insert_member(Member::new(community.m2, "m2"));
        store.insert_feed(Feed::new(community.feed_id, community.m1));
        community
    }

    pub fn replies_path(&self) -> String {
        format!("/api/v1/feeds/{}/replies", self.feed_id)
    }
}

/// Record a like outside the API; likes are owned by another subsystem
pub fn like(store: &InMemoryStore, member_id: Snowflake, reply_id: &str) {
    let reply_id = reply_id.parse().expect("reply id");
    store.insert_like(ReplyLike::new(member_id, reply_id));
}

pub fn reply_path(reply_id: &str) -> String {
    format!("/api/v1/replies/{reply_id}")
}

/// Create/update reply body
#[derive(Debug, Serialize)]
pub struct ContentBody {
    pub content: String,
}

impl ContentBody {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatedReply {
    pub reply_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplyView {
    pub reply_id: String,
    pub feed_id: String,
    pub author_id: String,
    pub content: String,
    pub liked_by_viewer: bool,
    pub deleted: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyPage {
    pub content: Vec<ReplyView>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
