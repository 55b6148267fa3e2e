use crate::core::{ContentRegion, PackageRecord, PresentationSurface};
use std::borrow::Borrow;

/// 產生卡片 HTML 並寫入呈現層，欄位值原樣輸出不做跳脫
#[derive(Debug, Default, Clone, Copy)]
pub struct CardRenderer;

impl CardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// 渲染卡片並更新搜尋結果筆數
    pub fn render_cards<S, R>(&self, surface: &mut S, records: &[R])
    where
        S: PresentationSurface + ?Sized,
        R: Borrow<PackageRecord>,
    {
        let markup: String = records
            .iter()
            .map(|record| {
                let record: &PackageRecord = record.borrow();
                self.render_card(record)
            })
            .collect();

        surface.set_content(ContentRegion::CardArea, &markup);
        surface.set_content(ContentRegion::ResultCount, &records.len().to_string());
        tracing::debug!("Rendered {} cards", records.len());
    }

    /// 生成單一卡片的 HTML
    pub fn render_card(&self, item: &PackageRecord) -> String {
        format!(
            r##"
    <li class="ticketCard">
      <div class="ticketCard-img">
        <a href="#">
          <img src="{img_url}" alt="">
        </a>
        <div class="ticketCard-region">{area}</div>
        <div class="ticketCard-rank">{rate}</div>
      </div>
      <div class="ticketCard-content">
        <div>
          <h3>
            <a href="#" class="ticketCard-name">{name}</a>
          </h3>
          <p class="ticketCard-description">{description}</p>
        </div>
        <div class="ticketCard-info">
          <div class="ticketCard-num">
            <p>
              <span><i class="fas fa-exclamation-circle"></i></span>
              剩下最後 <span>{group}</span> 組
            </p>
          </div>
          <p class="ticketCard-price">
            TWD <span>${price}</span>
          </p>
        </div>
      </div>
    </li>
  "##,
            img_url = item.img_url,
            area = item.area,
            rate = item.rate,
            name = item.name,
            description = item.description,
            group = item.group,
            price = item.price,
        )
    }

    /// 將呈現層目前的內容組成一份獨立的 HTML 文件
    pub fn render_page<S: PresentationSurface + ?Sized>(&self, surface: &S, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <div class="searchResult">
    <p class="regionSearch">{selector}</p>
    <p>本次搜尋共 <span class="searchResultNum">{count}</span> 筆資料</p>
  </div>
  <ul class="ticketCard-area">{cards}</ul>
</body>
</html>
"#,
            title = title,
            selector = surface.selector(),
            count = surface.content(ContentRegion::ResultCount),
            cards = surface.content(ContentRegion::CardArea),
        )
    }
}
