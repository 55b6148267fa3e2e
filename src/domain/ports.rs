use crate::domain::model::{ContentRegion, FormField, PackageRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// 套票資料來源，整個生命週期只會呼叫一次
#[async_trait]
pub trait PackageSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<PackageRecord>>;
}

/// 頁面呈現層：只描述「設定區塊 X 的內容」與「讀取欄位 Y 的值」
pub trait PresentationSurface {
    fn set_content(&mut self, region: ContentRegion, content: &str);
    fn content(&self, region: ContentRegion) -> String;

    fn read_field(&self, field: FormField) -> String;
    /// 空字串代表清除提示
    fn set_indicator(&mut self, field: FormField, markup: &str);
    fn reset_form(&mut self);

    fn selector(&self) -> String;
    fn set_selector(&mut self, value: &str);

    fn notify(&mut self, message: &str);
}
