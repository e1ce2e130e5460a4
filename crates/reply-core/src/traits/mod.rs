//! Repository ports consumed by the service layer

mod repositories;

pub use repositories::{
    FeedRepository, MemberRepository, ReplyLikeRepository, ReplyQuery, ReplyRepository,
    RepoResult,
};
