pub mod engine;
pub mod expand;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{LookupResult, LookupTarget};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TabDriver, TabHandle};
pub use crate::utils::error::Result;
