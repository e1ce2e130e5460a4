//! # reply-service
//!
//! Application layer: the reply engagement service, its dependency context,
//! and request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{ReplyService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
