use anyhow::Result;
use httpmock::prelude::*;
use std::time::Duration;
use travel_catalog::core::form::{INTEGER_TIP, REQUIRED_TIP};
use travel_catalog::core::{ContentRegion, FormField, IssueKind, PresentationSurface, ALL_REGIONS};
use travel_catalog::{CatalogEngine, CatalogError, HttpPackageSource, MemorySurface};

async fn loaded_engine(server: &MockServer) -> Result<CatalogEngine<MemorySurface>> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/travelApi.json");
            then.status(200).json_body(serde_json::json!({
                "data": [
                    {
                        "name": "Tokyo Tour",
                        "imgUrl": "https://example.com/tokyo.jpg",
                        "area": "Japan",
                        "description": "Five days in Tokyo",
                        "group": 12,
                        "price": 35000,
                        "rate": 9
                    },
                    {
                        "name": "Paris Tour",
                        "imgUrl": "https://example.com/paris.jpg",
                        "area": "Europe",
                        "description": "Seven days in Paris",
                        "group": 3,
                        "price": 60000,
                        "rate": 7
                    }
                ]
            }));
        })
        .await;

    let source = HttpPackageSource::new(server.url("/travelApi.json"), Duration::from_secs(5))?;
    let mut engine = CatalogEngine::new(MemorySurface::new());
    engine.load(&source).await?;
    Ok(engine)
}

fn fill_valid_form(surface: &mut MemorySurface) {
    surface.fill(FormField::Name, "Osaka Tour");
    surface.fill(FormField::ImgUrl, "https://example.com/osaka.jpg");
    surface.fill(FormField::Region, "Japan");
    surface.fill(FormField::Price, "28000");
    surface.fill(FormField::Num, "6");
    surface.fill(FormField::Rate, "8");
    surface.fill(FormField::Description, "Street food in Osaka");
}

/// 只有名稱空白時，只有名稱欄位出現必填提示，資料不變
#[tokio::test]
async fn test_missing_name_flags_only_name() -> Result<()> {
    let server = MockServer::start_async().await;
    let mut engine = loaded_engine(&server).await?;

    fill_valid_form(engine.surface_mut());
    engine.surface_mut().fill(FormField::Name, "");

    let err = engine.on_submit().unwrap_err();
    match err {
        CatalogError::FormRejected { issues } => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].field, FormField::Name);
            assert_eq!(issues[0].kind, IssueKind::Required);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    assert_eq!(engine.store().len(), 2);
    for field in FormField::ALL {
        let expected = if field == FormField::Name { REQUIRED_TIP } else { "" };
        assert_eq!(engine.surface().indicator(field), expected, "indicator of {}", field);
    }
    assert_eq!(engine.surface().read_field(FormField::Region), "Japan");
    Ok(())
}

/// 全部空白送出時七個欄位都顯示提示
#[tokio::test]
async fn test_blank_form_flags_every_field() -> Result<()> {
    let server = MockServer::start_async().await;
    let mut engine = loaded_engine(&server).await?;

    for field in FormField::ALL {
        engine.surface_mut().fill(field, "   ");
    }

    assert!(engine.on_submit().is_err());
    assert_eq!(engine.store().len(), 2);
    assert!(FormField::ALL
        .iter()
        .all(|f| engine.surface().indicator(*f) == REQUIRED_TIP));
    assert!(engine.surface().notifications().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_valid_submission_appends_and_clears() -> Result<()> {
    let server = MockServer::start_async().await;
    let mut engine = loaded_engine(&server).await?;
    engine.select_region("Europe");

    // 先送出一次錯誤的表單，再修正
    engine.surface_mut().fill(FormField::Rate, "");
    assert!(engine.on_submit().is_err());
    fill_valid_form(engine.surface_mut());

    let record = engine.on_submit()?.clone();

    assert_eq!(record.id, 2);
    assert_eq!(record.area, "Japan");
    assert_eq!(record.price, 28000);
    assert_eq!(engine.store().len(), 3);

    let surface = engine.surface();
    assert_eq!(surface.selector(), ALL_REGIONS);
    assert_eq!(surface.content(ContentRegion::ResultCount), "3");
    assert!(surface.content(ContentRegion::CardArea).contains("Osaka Tour"));
    assert!(FormField::ALL.iter().all(|f| surface.read_field(*f).is_empty()));
    assert!(FormField::ALL.iter().all(|f| surface.indicator(*f).is_empty()));
    assert_eq!(surface.notifications(), &["新增套票成功！".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_non_numeric_price_is_rejected() -> Result<()> {
    let server = MockServer::start_async().await;
    let mut engine = loaded_engine(&server).await?;

    fill_valid_form(engine.surface_mut());
    engine.surface_mut().fill(FormField::Price, "NT$28000");

    let err = engine.on_submit().unwrap_err();
    assert!(matches!(err, CatalogError::FormRejected { .. }));
    assert_eq!(engine.store().len(), 2);
    assert_eq!(engine.surface().indicator(FormField::Price), INTEGER_TIP);
    assert_eq!(engine.surface().read_field(FormField::Price), "NT$28000");
    Ok(())
}
