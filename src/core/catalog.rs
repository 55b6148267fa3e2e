use crate::core::append::{render_initial, submit_package};
use crate::core::filter::apply_region_filter;
use crate::core::form::FormValidator;
use crate::core::render::CardRenderer;
use crate::core::store::DataStore;
use crate::core::{PackageRecord, PackageSource, PresentationSurface};
use crate::utils::error::Result;

/// 串接資料載入、篩選與新增流程，持有 DataStore 與呈現層
pub struct CatalogEngine<S: PresentationSurface> {
    store: DataStore,
    surface: S,
    renderer: CardRenderer,
    validator: FormValidator,
}

impl<S: PresentationSurface> CatalogEngine<S> {
    pub fn new(surface: S) -> Self {
        Self::with_validator(surface, FormValidator::new())
    }

    pub fn with_validator(surface: S, validator: FormValidator) -> Self {
        Self {
            store: DataStore::new(),
            surface,
            renderer: CardRenderer::new(),
            validator,
        }
    }

    /// 從資料來源取得套票後初始化頁面。
    /// 失敗時只記錄並回傳錯誤，DataStore 保持原狀，由呼叫端決定如何提示使用者。
    pub async fn load<P: PackageSource + ?Sized>(&mut self, source: &P) -> Result<usize> {
        tracing::info!("📥 Loading travel packages");

        match source.fetch().await {
            Ok(records) => {
                self.store.replace_all(records);
                tracing::info!("✅ Loaded {} packages", self.store.len());
                self.init();
                Ok(self.store.len())
            }
            Err(e) => {
                tracing::error!("❌ Failed to load packages: {}", e);
                Err(e)
            }
        }
    }

    /// 篩選器回到「全部地區」並渲染全部套票
    pub fn init(&mut self) {
        render_initial(&self.store, &self.renderer, &mut self.surface);
    }

    /// 篩選器變更時呼叫
    pub fn on_region_change(&mut self) -> usize {
        apply_region_filter(&self.store, &self.renderer, &mut self.surface)
    }

    /// 設定篩選器後立即套用
    pub fn select_region(&mut self, value: &str) -> usize {
        self.surface.set_selector(value);
        self.on_region_change()
    }

    /// 送出新增表單
    pub fn on_submit(&mut self) -> Result<&PackageRecord> {
        submit_package(&mut self.store, &self.validator, &self.renderer, &mut self.surface)
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// 目前頁面內容組成的完整 HTML
    pub fn page(&self, title: &str) -> String {
        self.renderer.render_page(&self.surface, title)
    }
}
