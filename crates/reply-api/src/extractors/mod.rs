//! Axum extractors for request handling
//!
//! Custom extractors for viewer identity, JSON bodies, paths, and paging.

mod json;
mod pagination;
mod path;
mod viewer;

pub use json::JsonBody;
pub use pagination::PageParams;
pub use path::{FeedIdPath, ReplyIdPath};
pub use viewer::ViewerContext;
