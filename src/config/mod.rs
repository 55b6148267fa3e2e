#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{AddArgs, CliConfig, Command};
pub use toml_config::TomlConfig;

pub const DEFAULT_API_ENDPOINT: &str =
    "https://raw.githubusercontent.com/hexschool/js-training/main/travelApi.json";

/// 未指定時的請求逾時秒數
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
