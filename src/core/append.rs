use crate::core::form::FormValidator;
use crate::core::render::CardRenderer;
use crate::core::store::DataStore;
use crate::core::{PackageRecord, PresentationSurface, ALL_REGIONS};
use crate::utils::error::Result;

pub const APPEND_SUCCESS_MESSAGE: &str = "新增套票成功！";

/// 初始化頁面：篩選器回到「全部地區」並渲染全部套票
pub fn render_initial<S: PresentationSurface + ?Sized>(
    store: &DataStore,
    renderer: &CardRenderer,
    surface: &mut S,
) {
    surface.set_selector(ALL_REGIONS);
    renderer.render_cards(surface, store.all());
}

/// 新增套票：驗證 → 寫入 → 重新渲染 → 清空表單。
/// 驗證失敗時直接回傳錯誤，表單內容與 DataStore 都不變動。
pub fn submit_package<'a, S: PresentationSurface + ?Sized>(
    store: &'a mut DataStore,
    validator: &FormValidator,
    renderer: &CardRenderer,
    surface: &mut S,
) -> Result<&'a PackageRecord> {
    let draft = validator.validate(surface)?;

    let id = store.append(draft).id;
    tracing::info!("➕ Added package #{} ({} total)", id, store.len());

    render_initial(store, renderer, surface);
    surface.reset_form();
    validator.clear_indicators(surface);
    surface.notify(APPEND_SUCCESS_MESSAGE);

    Ok(&store.all()[id])
}
