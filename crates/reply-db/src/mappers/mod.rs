//! Entity to model mappers
//!
//! - `From<Model> for Entity`: database rows to domain objects
//! - `*Insert` structs: entity data prepared for binding

mod feed;
mod member;
mod reply;

pub use reply::ReplyInsert;
