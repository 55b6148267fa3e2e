use crate::domain::model::FieldIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Form rejected: {}", describe_issues(.issues))]
    FormRejected { issues: Vec<FieldIssue> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Validation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

fn describe_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} ({})", issue.field.input_id(), issue.kind))
        .collect::<Vec<_>>()
        .join(", ")
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ApiError(_) | CatalogError::HttpStatus { .. } => ErrorCategory::Network,
            CatalogError::SerializationError(_) => ErrorCategory::Data,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CatalogError::FormRejected { .. } => ErrorCategory::Validation,
            CatalogError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 初始資料載入失敗 (網路或資料格式)
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::ApiError(_)
                | CatalogError::HttpStatus { .. }
                | CatalogError::SerializationError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            e if e.is_fetch_failure() => "未正確取得 API 資料".to_string(),
            CatalogError::FormRejected { issues } => {
                format!("表單有 {} 個欄位未通過驗證: {}", issues.len(), describe_issues(issues))
            }
            CatalogError::IoError(e) => format!("檔案寫入失敗: {}", e),
            other => format!("設定錯誤: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the API endpoint and your network connection",
            ErrorCategory::Data => "Make sure the endpoint returns a JSON body with a 'data' array",
            ErrorCategory::Configuration => "Review the command-line flags or the TOML config file",
            ErrorCategory::Validation => "Fill in every required field; group, price and rate must be integers",
            ErrorCategory::System => "Check that the output directory is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
