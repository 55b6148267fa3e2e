pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{http::HttpPackageSource, storage::LocalStorage, surface::MemorySurface};
pub use core::catalog::CatalogEngine;
pub use utils::error::{CatalogError, Result};
