use crate::core::render::CardRenderer;
use crate::core::store::DataStore;
use crate::core::{PresentationSurface, RegionSelection};

/// 篩選邏輯：依篩選器目前的值重新渲染，不修改 DataStore
pub fn apply_region_filter<S: PresentationSurface + ?Sized>(
    store: &DataStore,
    renderer: &CardRenderer,
    surface: &mut S,
) -> usize {
    let selection = RegionSelection::from_selector(&surface.selector());
    let view = store.filtered(&selection);

    tracing::debug!("Region filter {:?} matched {} of {} packages", selection, view.len(), store.len());
    renderer.render_cards(surface, &view);
    view.len()
}
