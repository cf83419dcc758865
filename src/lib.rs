pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::client::JsonClient;
pub use crate::core::clone::deep_clone;
pub use crate::domain::model::Mode;
pub use crate::domain::ports::JsonFetch;
pub use crate::utils::error::{FetchError, Result};
