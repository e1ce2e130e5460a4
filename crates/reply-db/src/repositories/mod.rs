//! Repository implementations
//!
//! PostgreSQL implementations of the repository ports defined in reply-core.

mod error;
mod feed;
mod member;
mod reply;
mod reply_like;

pub use error::map_db_error;
pub use feed::PgFeedRepository;
pub use member::PgMemberRepository;
pub use reply::PgReplyRepository;
pub use reply_like::PgReplyLikeRepository;
