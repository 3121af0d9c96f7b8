//! Write and query operations of the series API.

mod query;
mod write;

pub use query::*;
pub use write::*;
