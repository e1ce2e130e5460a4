//! Value objects - immutable types that represent domain concepts

mod page;
mod snowflake;
mod viewer;

pub use page::{Page, PageRequest, TombstoneVisibility};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use viewer::Viewer;
