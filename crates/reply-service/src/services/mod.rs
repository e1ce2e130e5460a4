//! Business logic services
//!
//! Services borrow a `ServiceContext` and orchestrate domain rules over the
//! repository ports.

pub mod context;
pub mod error;
pub mod reply;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reply::ReplyService;
