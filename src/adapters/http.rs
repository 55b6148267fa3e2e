use crate::core::{CatalogResponse, ConfigProvider, PackageRecord, PackageSource};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 以單次 GET 取得套票資料，不重試
#[derive(Debug, Clone)]
pub struct HttpPackageSource {
    endpoint: String,
    client: Client,
}

impl HttpPackageSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PackageSource for HttpPackageSource {
    async fn fetch(&self) -> Result<Vec<PackageRecord>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let parsed: CatalogResponse = serde_json::from_str(&body)?;
        tracing::debug!("Parsed {} packages from response", parsed.data.len());

        Ok(parsed.data)
    }
}
