//! Service context - dependency container for services

use std::sync::Arc;

use reply_common::auth::JwtService;
use reply_common::ReplyConfig;
use reply_core::traits::{FeedRepository, MemberRepository, ReplyLikeRepository, ReplyRepository};
use reply_core::{Snowflake, SnowflakeGenerator};
use reply_db::{
    InMemoryStore, PgFeedRepository, PgMemberRepository, PgPool, PgReplyLikeRepository,
    PgReplyRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    // Present only for the PostgreSQL backend; used by readiness checks
    pool: Option<PgPool>,

    member_repo: Arc<dyn MemberRepository>,
    feed_repo: Arc<dyn FeedRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    reply_like_repo: Arc<dyn ReplyLikeRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    reply_config: Arc<ReplyConfig>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn feed_repo(&self) -> &dyn FeedRepository {
        self.feed_repo.as_ref()
    }

    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    pub fn reply_like_repo(&self) -> &dyn ReplyLikeRepository {
        self.reply_like_repo.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn reply_config(&self) -> &ReplyConfig {
        self.reply_config.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("backend", &if self.pool.is_some() { "postgres" } else { "memory" })
            .field("reply_config", &self.reply_config)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    feed_repo: Option<Arc<dyn FeedRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    reply_like_repo: Option<Arc<dyn ReplyLikeRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    reply_config: Option<ReplyConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use PostgreSQL repositories over `pool`
    pub fn postgres(mut self, pool: PgPool) -> Self {
        self.member_repo = Some(Arc::new(PgMemberRepository::new(pool.clone())));
        self.feed_repo = Some(Arc::new(PgFeedRepository::new(pool.clone())));
        self.reply_repo = Some(Arc::new(PgReplyRepository::new(pool.clone())));
        self.reply_like_repo = Some(Arc::new(PgReplyLikeRepository::new(pool.clone())));
        self.pool = Some(pool);
        self
    }

    /// Use one in-memory store for every repository
    pub fn in_memory(mut self, store: InMemoryStore) -> Self {
        self.member_repo = Some(Arc::new(store.clone()));
        self.feed_repo = Some(Arc::new(store.clone()));
        self.reply_repo = Some(Arc::new(store.clone()));
        self.reply_like_repo = Some(Arc::new(store));
        self.pool = None;
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn feed_repo(mut self, repo: Arc<dyn FeedRepository>) -> Self {
        self.feed_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn reply_like_repo(mut self, repo: Arc<dyn ReplyLikeRepository>) -> Self {
        self.reply_like_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn reply_config(mut self, config: ReplyConfig) -> Self {
        self.reply_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// The generator defaults to worker 0 and the reply policy to its defaults.
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a repository or the JWT service is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            member_repo: required(self.member_repo, "member_repo")?,
            feed_repo: required(self.feed_repo, "feed_repo")?,
            reply_repo: required(self.reply_repo, "reply_repo")?,
            reply_like_repo: required(self.reply_like_repo, "reply_like_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            snowflake_generator: self
                .snowflake_generator
                .unwrap_or_else(|| Arc::new(SnowflakeGenerator::default())),
            reply_config: Arc::new(self.reply_config.unwrap_or_default()),
        })
    }
}
