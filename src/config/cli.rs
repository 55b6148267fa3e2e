use crate::config::DEFAULT_API_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "travel-catalog")]
#[command(about = "Browse, filter and extend a travel package catalog")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "catalog.html")]
    pub output_filename: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the catalog, optionally narrowed to one region
    List {
        #[arg(long)]
        region: Option<String>,
    },
    /// Print every region present in the catalog
    Regions,
    /// Submit the add-package form and render the updated catalog
    Add(AddArgs),
}

/// 新增表單的欄位，未提供的欄位視為空白
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub img_url: String,

    #[arg(long, default_value = "")]
    pub region: String,

    #[arg(long, default_value = "")]
    pub price: String,

    #[arg(long, default_value = "")]
    pub num: String,

    #[arg(long, default_value = "")]
    pub rate: String,

    #[arg(long, default_value = "")]
    pub description: String,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("output_filename", &self.output_filename)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        Ok(())
    }
}
