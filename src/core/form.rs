use crate::core::{FieldIssue, FormField, IssueKind, PackageDraft, PresentationSurface};
use crate::utils::error::{CatalogError, Result};
use std::collections::HashMap;

/// 必填提示
pub const REQUIRED_TIP: &str = r#"<i class="fas fa-exclamation-circle"></i><span>必填!</span>"#;

/// 數字欄位格式錯誤提示
pub const INTEGER_TIP: &str = r#"<i class="fas fa-exclamation-circle"></i><span>請輸入整數!</span>"#;

#[derive(Debug, Clone)]
pub struct FormValidator {
    required_tip: String,
    integer_tip: String,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self {
            required_tip: REQUIRED_TIP.to_string(),
            integer_tip: INTEGER_TIP.to_string(),
        }
    }
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次送出都重新檢查七個欄位，逐欄更新提示。
    ///
    /// 欄位去除空白後為空顯示必填提示；group、price、rate 另需為十進位整數。
    /// 通過的欄位只清除自己的提示，其餘欄位的提示維持不變。
    pub fn validate<S: PresentationSurface + ?Sized>(&self, surface: &mut S) -> Result<PackageDraft> {
        let mut values: HashMap<FormField, String> = HashMap::new();
        let mut numbers: HashMap<FormField, i64> = HashMap::new();
        let mut issues = Vec::new();

        for field in FormField::ALL {
            let value = surface.read_field(field).trim().to_string();

            let issue = if value.is_empty() {
                Some(IssueKind::Required)
            } else if field.is_numeric() {
                match value.parse::<i64>() {
                    Ok(number) => {
                        numbers.insert(field, number);
                        None
                    }
                    Err(_) => Some(IssueKind::NotAnInteger),
                }
            } else {
                None
            };

            match issue {
                Some(kind) => {
                    surface.set_indicator(field, self.tip_for(kind));
                    issues.push(FieldIssue::new(field, kind));
                }
                None => surface.set_indicator(field, ""),
            }
            values.insert(field, value);
        }

        if !issues.is_empty() {
            tracing::debug!("Form validation failed on {} field(s)", issues.len());
            return Err(CatalogError::FormRejected { issues });
        }

        let mut take = |field: FormField| values.remove(&field).unwrap_or_default();
        let number = |field: FormField| numbers.get(&field).copied().unwrap_or_default();

        Ok(PackageDraft {
            name: take(FormField::Name),
            img_url: take(FormField::ImgUrl),
            area: take(FormField::Region),
            description: take(FormField::Description),
            group: number(FormField::Num),
            price: number(FormField::Price),
            rate: number(FormField::Rate),
        })
    }

    /// 清空所有欄位的提示
    pub fn clear_indicators<S: PresentationSurface + ?Sized>(&self, surface: &mut S) {
        for field in FormField::ALL {
            surface.set_indicator(field, "");
        }
    }

    fn tip_for(&self, kind: IssueKind) -> &str {
        match kind {
            IssueKind::Required => &self.required_tip,
            IssueKind::NotAnInteger => &self.integer_tip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::surface::MemorySurface;

    fn filled_surface() -> MemorySurface {
        let mut surface = MemorySurface::new();
        surface.fill(FormField::Name, "  Tokyo Tour ");
        surface.fill(FormField::ImgUrl, "https://example.com/tokyo.jpg");
        surface.fill(FormField::Region, "Japan");
        surface.fill(FormField::Price, " 35000");
        surface.fill(FormField::Num, "12");
        surface.fill(FormField::Rate, "-3");
        surface.fill(FormField::Description, "Five days in Tokyo");
        surface
    }

    #[test]
    fn test_valid_form_builds_trimmed_draft() {
        let mut surface = filled_surface();
        let draft = FormValidator::new().validate(&mut surface).unwrap();

        assert_eq!(draft.name, "Tokyo Tour");
        assert_eq!(draft.area, "Japan");
        assert_eq!(draft.price, 35000);
        assert_eq!(draft.group, 12);
        assert_eq!(draft.rate, -3);
        assert!(FormField::ALL.iter().all(|f| surface.indicator(*f).is_empty()));
    }

    #[test]
    fn test_only_empty_fields_are_flagged() {
        let mut surface = filled_surface();
        surface.fill(FormField::Name, "   ");

        let err = FormValidator::new().validate(&mut surface).unwrap_err();
        match err {
            CatalogError::FormRejected { issues } => {
                assert_eq!(issues, vec![FieldIssue::new(FormField::Name, IssueKind::Required)]);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert_eq!(surface.indicator(FormField::Name), REQUIRED_TIP);
        for field in FormField::ALL.into_iter().filter(|f| *f != FormField::Name) {
            assert_eq!(surface.indicator(field), "", "{} should be clear", field);
        }
    }

    #[test]
    fn test_correcting_one_field_clears_only_that_indicator() {
        let mut surface = filled_surface();
        surface.fill(FormField::Name, "");
        surface.fill(FormField::Description, "");
        let validator = FormValidator::new();

        assert!(validator.validate(&mut surface).is_err());
        assert_eq!(surface.indicator(FormField::Name), REQUIRED_TIP);
        assert_eq!(surface.indicator(FormField::Description), REQUIRED_TIP);

        surface.fill(FormField::Name, "Tokyo Tour");
        assert!(validator.validate(&mut surface).is_err());
        assert_eq!(surface.indicator(FormField::Name), "");
        assert_eq!(surface.indicator(FormField::Description), REQUIRED_TIP);
    }

    #[test]
    fn test_non_integer_numeric_field_is_rejected() {
        let mut surface = filled_surface();
        surface.fill(FormField::Price, "12abc");
        surface.fill(FormField::Rate, "");

        let err = FormValidator::new().validate(&mut surface).unwrap_err();
        match err {
            CatalogError::FormRejected { issues } => {
                assert_eq!(
                    issues,
                    vec![
                        FieldIssue::new(FormField::Price, IssueKind::NotAnInteger),
                        FieldIssue::new(FormField::Rate, IssueKind::Required),
                    ]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(surface.indicator(FormField::Price), INTEGER_TIP);
        assert_eq!(surface.indicator(FormField::Rate), REQUIRED_TIP);
    }
}
