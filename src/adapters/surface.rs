use crate::core::{ContentRegion, FormField, PresentationSurface, ALL_REGIONS};
use std::collections::HashMap;

/// 不依賴瀏覽器的呈現層，保存所有區塊內容、欄位值與提示訊息
#[derive(Debug, Clone)]
pub struct MemorySurface {
    regions: HashMap<ContentRegion, String>,
    fields: HashMap<FormField, String>,
    indicators: HashMap<FormField, String>,
    selector: String,
    notifications: Vec<String>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            regions: HashMap::new(),
            fields: HashMap::new(),
            indicators: HashMap::new(),
            selector: ALL_REGIONS.to_string(),
            notifications: Vec::new(),
        }
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模擬使用者在欄位中輸入
    pub fn fill(&mut self, field: FormField, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    pub fn indicator(&self, field: FormField) -> &str {
        self.indicators.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl PresentationSurface for MemorySurface {
    fn set_content(&mut self, region: ContentRegion, content: &str) {
        self.regions.insert(region, content.to_string());
    }

    fn content(&self, region: ContentRegion) -> String {
        self.regions.get(&region).cloned().unwrap_or_default()
    }

    fn read_field(&self, field: FormField) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_indicator(&mut self, field: FormField, markup: &str) {
        if markup.is_empty() {
            self.indicators.remove(&field);
        } else {
            self.indicators.insert(field, markup.to_string());
        }
    }

    fn reset_form(&mut self) {
        self.fields.clear();
    }

    fn selector(&self) -> String {
        self.selector.clone()
    }

    fn set_selector(&mut self, value: &str) {
        self.selector = value.to_string();
    }

    fn notify(&mut self, message: &str) {
        tracing::info!("🔔 {}", message);
        self.notifications.push(message.to_string());
    }
}
