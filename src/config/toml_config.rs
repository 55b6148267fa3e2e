use crate::config::{DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_API})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("catalog.name", &self.catalog.name)?;
        crate::utils::validation::validate_url("source.endpoint", &self.source.endpoint)?;
        crate::utils::validation::validate_path("output.path", &self.output.path)?;

        if let Some(filename) = &self.output.filename {
            crate::utils::validation::validate_non_empty_string("output.filename", filename)?;
        }

        if let Some(timeout) = self.source.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "source.timeout_seconds",
                timeout as usize,
                1,
            )?;
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_filename(&self) -> &str {
        self.output.filename.as_deref().unwrap_or("catalog.html")
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
