use crate::core::{PackageDraft, PackageRecord, RegionSelection};

/// 本次頁面生命週期內所有套票，唯一的資料來源
#[derive(Debug, Default, Clone)]
pub struct DataStore {
    records: Vec<PackageRecord>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以 API 回傳的資料整批取代，id 依陣列索引重新編號
    pub fn replace_all(&mut self, records: Vec<PackageRecord>) {
        self.records = records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                record.id = index;
                record
            })
            .collect();
    }

    /// 新增一筆套票，id 為新增前的筆數
    pub fn append(&mut self, draft: PackageDraft) -> &PackageRecord {
        let id = self.records.len();
        self.records.push(draft.into_record(id));
        &self.records[id]
    }

    pub fn all(&self) -> &[PackageRecord] {
        &self.records
    }

    pub fn filtered(&self, selection: &RegionSelection) -> Vec<&PackageRecord> {
        self.records
            .iter()
            .filter(|record| selection.matches(record))
            .collect()
    }

    /// 依第一次出現的順序列出所有地區
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for record in &self.records {
            if !regions.contains(&record.area.as_str()) {
                regions.push(&record.area);
            }
        }
        regions
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
