pub mod client;
pub mod clone;

pub use crate::domain::model::Mode;
pub use crate::domain::ports::JsonFetch;
pub use crate::utils::error::Result;
