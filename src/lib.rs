pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpTabDriver;
pub use adapters::storage::LocalStorage;
pub use config::{CliConfig, APP_NAME};
pub use core::engine::{LookupEngine, RunReport};
pub use core::pipeline::PriceLookupPipeline;
pub use utils::error::{FinderError, Result};
