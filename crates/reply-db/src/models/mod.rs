//! Database models
//!
//! Row types with SQLx `FromRow` derives, one per table.

mod feed;
mod member;
mod reply;

pub use feed::FeedModel;
pub use member::MemberModel;
pub use reply::ReplyModel;
