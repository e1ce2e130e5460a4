//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::ReplyWithViewerState;
pub use requests::{
    CreateReplyRequest, ListRepliesQuery, UpdateReplyRequest, MAX_REQUEST_CONTENT_CHARS,
};
pub use responses::{
    CreatedReplyResponse, HealthChecks, HealthResponse, PageResponse, ReadinessResponse,
    ReplyResponse,
};
