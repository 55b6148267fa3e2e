use serde::{Deserialize, Serialize};
use std::fmt;

/// 篩選器的「全部地區」選項
pub const ALL_REGIONS: &str = "全部地區";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    /// 建立當下的陣列索引，API 回傳的 id 一律忽略
    #[serde(default, skip_deserializing)]
    pub id: usize,
    pub name: String,
    pub img_url: String,
    pub area: String,
    pub description: String,
    pub group: i64,
    pub price: i64,
    pub rate: i64,
}

/// 已通過表單驗證、尚未寫入 DataStore 的套票
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDraft {
    pub name: String,
    pub img_url: String,
    pub area: String,
    pub description: String,
    pub group: i64,
    pub price: i64,
    pub rate: i64,
}

impl PackageDraft {
    pub fn into_record(self, id: usize) -> PackageRecord {
        PackageRecord {
            id,
            name: self.name,
            img_url: self.img_url,
            area: self.area,
            description: self.description,
            group: self.group,
            price: self.price,
            rate: self.rate,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    pub data: Vec<PackageRecord>,
}

/// 新增套票表單的七個必填欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    ImgUrl,
    Region,
    Price,
    Num,
    Rate,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::ImgUrl,
        FormField::Region,
        FormField::Price,
        FormField::Num,
        FormField::Rate,
        FormField::Description,
    ];

    pub fn input_id(self) -> &'static str {
        match self {
            FormField::Name => "ticketName",
            FormField::ImgUrl => "ticketImgUrl",
            FormField::Region => "ticketRegion",
            FormField::Price => "ticketPrice",
            FormField::Num => "ticketNum",
            FormField::Rate => "ticketRate",
            FormField::Description => "ticketDescription",
        }
    }

    pub fn indicator_id(self) -> String {
        format!("{}-message", self.input_id())
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, FormField::Price | FormField::Num | FormField::Rate)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Required,
    NotAnInteger,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Required => f.write_str("required"),
            IssueKind::NotAnInteger => f.write_str("not an integer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: FormField,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(field: FormField, kind: IssueKind) -> Self {
        Self { field, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSelection {
    All,
    Region(String),
}

impl RegionSelection {
    /// 依篩選器的值判斷，只有完全等於「全部地區」才視為全部
    pub fn from_selector(value: &str) -> Self {
        if value == ALL_REGIONS {
            RegionSelection::All
        } else {
            RegionSelection::Region(value.to_string())
        }
    }

    pub fn matches(&self, record: &PackageRecord) -> bool {
        match self {
            RegionSelection::All => true,
            RegionSelection::Region(area) => record.area == *area,
        }
    }
}

/// 頁面上可寫入內容的區塊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentRegion {
    CardArea,
    ResultCount,
}
