//! In-memory backend for the repository ports
//!
//! All tables sit behind one lock, so a reply insert and its counter bump
//! are observed together. Guards are never held across an `.await`.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::instrument;

use reply_core::entities::{Feed, Member, Reply, ReplyLike};
use reply_core::error::DomainError;
use reply_core::traits::{
    FeedRepository, MemberRepository, ReplyLikeRepository, ReplyQuery, ReplyRepository,
    RepoResult,
};
use reply_core::value_objects::{Page, Snowflake};

#[derive(Default)]
struct Tables {
    members: HashMap<Snowflake, Member>,
    feeds: HashMap<Snowflake, Feed>,
    // Keyed by id so iteration is creation order
    replies: BTreeMap<Snowflake, Reply>,
    likes: HashSet<(Snowflake, Snowflake)>,
}

/// Shared in-memory store implementing every repository port
///
/// Cloning is cheap; clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Seeding (members, feeds, and likes are owned by other subsystems)
    // =========================================================================

    pub fn insert_member(&self, member: Member) {
        self.tables.write().members.insert(member.id, member);
    }

    pub fn insert_feed(&self, feed: Feed) {
        self.tables.write().feeds.insert(feed.id, feed);
    }

    pub fn insert_like(&self, like: ReplyLike) {
        self.tables
            .write()
            .likes
            .insert((like.member_id, like.reply_id));
    }

    /// Snapshot of a feed, for assertions
    pub fn feed(&self, id: Snowflake) -> Option<Feed> {
        self.tables.read().feeds.get(&id).cloned()
    }

    /// Snapshot of a reply, for assertions
    pub fn reply(&self, id: Snowflake) -> Option<Reply> {
        self.tables.read().replies.get(&id).cloned()
    }

    pub fn reply_count(&self) -> usize {
        self.tables.read().replies.len()
    }

    /// Make every port call fail with `StorageUnavailable` until reset
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::StorageUnavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Member>> {
        self.check_available()?;
        Ok(self.tables.read().members.get(&id).cloned())
    }
}

#[async_trait]
impl FeedRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Feed>> {
        self.check_available()?;
        Ok(self.tables.read().feeds.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn increment_replies_count(&self, id: Snowflake, delta: i64) -> RepoResult<()> {
        self.check_available()?;
        let mut tables = self.tables.write();
        let feed = tables
            .feeds
            .get_mut(&id)
            .ok_or(DomainError::FeedNotFound(id))?;
        feed.apply_replies_delta(delta);
        Ok(())
    }
}

#[async_trait]
impl ReplyRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reply>> {
        self.check_available()?;
        Ok(self.tables.read().replies.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_feed(&self, feed_id: Snowflake, query: ReplyQuery) -> RepoResult<Page<Reply>> {
        self.check_available()?;
        let tables = self.tables.read();

        let matching: Vec<&Reply> = tables
            .replies
            .values()
            .filter(|r| r.feed_id == feed_id && (query.include_deleted || !r.deleted))
            .collect();

        let total = matching.len() as u64;
        let offset = usize::try_from(query.page.offset()).unwrap_or(usize::MAX);
        let content = matching
            .into_iter()
            .skip(offset)
            .take(query.page.size as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, query.page, total))
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id))]
    async fn create(&self, reply: &Reply) -> RepoResult<()> {
        self.check_available()?;
        let mut tables = self.tables.write();

        if !tables.members.contains_key(&reply.author_id) {
            return Err(DomainError::MemberNotFound(reply.author_id));
        }
        let feed = tables
            .feeds
            .get_mut(&reply.feed_id)
            .ok_or(DomainError::FeedNotFound(reply.feed_id))?;
        feed.apply_replies_delta(1);
        tables.replies.insert(reply.id, reply.clone());

        Ok(())
    }

    #[instrument(skip(self, reply), fields(reply_id = %reply.id))]
    async fn update_content(&self, reply: &Reply) -> RepoResult<()> {
        self.check_available()?;
        let mut tables = self.tables.write();

        let stored = tables
            .replies
            .get_mut(&reply.id)
            .filter(|r| !r.deleted)
            .ok_or(DomainError::ReplyNotFound(reply.id))?;
        stored.content.clone_from(&reply.content);
        stored.updated_at = Some(reply.updated_at.unwrap_or_else(Utc::now));

        Ok(())
    }

    #[instrument(skip(self))]
    async fn tombstone(&self, id: Snowflake, decrement_feed: bool) -> RepoResult<bool> {
        self.check_available()?;
        let mut tables = self.tables.write();

        let Some(reply) = tables.replies.get_mut(&id) else {
            return Ok(false);
        };
        if reply.tombstone().is_err() {
            return Ok(false);
        }
        let feed_id = reply.feed_id;

        if decrement_feed {
            if let Some(feed) = tables.feeds.get_mut(&feed_id) {
                feed.apply_replies_delta(-1);
            }
        }

        Ok(true)
    }
}

#[async_trait]
impl ReplyLikeRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn exists(&self, member_id: Snowflake, reply_id: Snowflake) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self.tables.read().likes.contains(&(member_id, reply_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reply_core::value_objects::PageRequest;

    fn seeded() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert_member(Member::new(Snowflake::new(1), "m1"));
        store.insert_feed(Feed::new(Snowflake::new(10), Snowflake::new(1)));
        store
    }

    fn reply(id: i64) -> Reply {
        Reply::new(
            Snowflake::new(id),
            Snowflake::new(10),
            Snowflake::new(1),
            format!("reply {id}"),
        )
    }

    #[tokio::test]
    async fn test_create_bumps_counter() {
        let store = seeded();
        ReplyRepository::create(&store, &reply(100)).await.unwrap();
        ReplyRepository::create(&store, &reply(101)).await.unwrap();

        assert_eq!(store.feed(Snowflake::new(10)).unwrap().replies_count, 2);
        assert_eq!(store.reply_count(), 2);
    }

    #[tokio::test]
    async fn test_create_on_missing_feed_writes_nothing() {
        let store = seeded();
        let mut orphan = reply(100);
        orphan.feed_id = Snowflake::new(999);

        let result = ReplyRepository::create(&store, &orphan).await;
        assert!(matches!(result, Err(DomainError::FeedNotFound(_))));
        assert_eq!(store.reply_count(), 0);
    }

    #[tokio::test]
    async fn test_create_by_missing_author_writes_nothing() {
        let store = seeded();
        let mut orphan = reply(100);
        orphan.author_id = Snowflake::new(2);

        let result = ReplyRepository::create(&store, &orphan).await;
        assert!(matches!(result, Err(DomainError::MemberNotFound(id)) if id == Snowflake::new(2)));
        assert_eq!(store.feed(Snowflake::new(10)).unwrap().replies_count, 0);
        assert_eq!(store.reply_count(), 0);
    }

    #[tokio::test]
    async fn test_find_by_feed_pages_in_id_order() {
        let store = seeded();
        for id in [103, 101, 102] {
            ReplyRepository::create(&store, &reply(id)).await.unwrap();
        }

        let query = ReplyQuery {
            page: PageRequest { page: 0, size: 2 },
            include_deleted: true,
        };
        let page = store.find_by_feed(Snowflake::new(10), query).await.unwrap();

        let ids: Vec<i64> = page.content.iter().map(|r| r.id.into_inner()).collect();
        assert_eq!(ids, vec![101, 102]);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_tombstone_once() {
        let store = seeded();
        ReplyRepository::create(&store, &reply(100)).await.unwrap();

        assert!(store.tombstone(Snowflake::new(100), true).await.unwrap());
        assert!(!store.tombstone(Snowflake::new(100), true).await.unwrap());
        assert!(!store.tombstone(Snowflake::new(404), true).await.unwrap());

        assert_eq!(store.feed(Snowflake::new(10)).unwrap().replies_count, 0);

        let hidden = ReplyQuery {
            page: PageRequest::default(),
            include_deleted: false,
        };
        let page = store.find_by_feed(Snowflake::new(10), hidden).await.unwrap();
        assert!(page.content.is_empty());
    }

    #[tokio::test]
    async fn test_update_content_rejects_tombstoned() {
        let store = seeded();
        ReplyRepository::create(&store, &reply(100)).await.unwrap();
        store.tombstone(Snowflake::new(100), false).await.unwrap();

        let mut edited = reply(100);
        edited.content = "late edit".to_string();
        assert!(matches!(
            store.update_content(&edited).await,
            Err(DomainError::ReplyNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_like_lookup() {
        let store = seeded();
        store.insert_like(ReplyLike::new(Snowflake::new(1), Snowflake::new(100)));

        assert!(store
            .exists(Snowflake::new(1), Snowflake::new(100))
            .await
            .unwrap());
        assert!(!store
            .exists(Snowflake::new(2), Snowflake::new(100))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let store = seeded();
        store.set_unavailable(true);

        let result = MemberRepository::find_by_id(&store, Snowflake::new(1)).await;
        assert!(matches!(result, Err(DomainError::StorageUnavailable(_))));

        store.set_unavailable(false);
        assert!(MemberRepository::find_by_id(&store, Snowflake::new(1))
            .await
            .unwrap()
            .is_some());
    }
}
