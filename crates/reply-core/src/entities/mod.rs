//! Domain entities - core business objects

mod feed;
mod member;
mod reply;
mod reply_like;

pub use feed::Feed;
pub use member::Member;
pub use reply::{ensure_author, Authored, Reply, ReplyState, DELETED_PLACEHOLDER};
pub use reply_like::ReplyLike;
