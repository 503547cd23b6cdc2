use crate::domain::model::Choice;
use chrono::NaiveDate;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 欄位的呈現方式
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    TextArea { rows: u32, cols: u32 },
    Select { choices: Vec<Choice> },
    Date { format: String },
    Submit,
    List {
        min_entries: usize,
        max_entries: usize,
        entry: Vec<FieldSpec>,
    },
}

/// 單一欄位的宣告：名稱、標籤、是否必填與型別
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required: false,
            kind,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn password(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub fn text_area(name: &str, label: &str, rows: u32, cols: u32) -> Self {
        Self::new(name, label, FieldKind::TextArea { rows, cols })
    }

    pub fn select(name: &str, label: &str, choices: Vec<Choice>) -> Self {
        Self::new(name, label, FieldKind::Select { choices })
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Date {
                format: DATE_FORMAT.to_string(),
            },
        )
    }

    pub fn submit(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Submit)
    }

    pub fn list(
        name: &str,
        label: &str,
        min_entries: usize,
        max_entries: usize,
        entry: Vec<FieldSpec>,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::List {
                min_entries,
                max_entries,
                entry,
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// 可直接交給樣板渲染的整張表單描述
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(name: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// 日期欄位：保留送出的原文，解析結果另存
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateValue {
    raw: Option<String>,
    value: Option<NaiveDate>,
}

impl DateValue {
    pub fn bind(raw: Option<&str>) -> Self {
        match raw {
            Some(text) => Self {
                raw: Some(text.to_string()),
                // chrono 解析數字前會略過前導空白，這裡要求原文完全符合格式
                value: if text.trim() == text {
                    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
                } else {
                    None
                },
            },
            None => Self::default(),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// 有送出但無法解析
    pub fn is_invalid(&self) -> bool {
        self.raw.is_some() && self.value.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_value_absent_is_not_invalid() {
        let date = DateValue::bind(None);
        assert_eq!(date.value(), None);
        assert!(!date.is_invalid());
    }

    #[test]
    fn test_date_value_parses_iso_dates() {
        let date = DateValue::bind(Some("2019-09-01"));
        assert_eq!(date.value(), NaiveDate::from_ymd_opt(2019, 9, 1));
        assert!(!date.is_invalid());
    }

    #[test]
    fn test_date_value_rejects_other_formats_and_empty() {
        assert!(DateValue::bind(Some("01/09/2019")).is_invalid());
        assert!(DateValue::bind(Some("2019-02-30")).is_invalid());
        assert!(DateValue::bind(Some("")).is_invalid());
    }

    #[test]
    fn test_date_value_rejects_surrounding_whitespace() {
        let date = DateValue::bind(Some(" 2019-09-01 "));
        assert!(date.is_invalid());
        assert_eq!(date.value(), None);
        assert_eq!(date.raw(), Some(" 2019-09-01 "));
        assert!(DateValue::bind(Some(" 2019-09-01")).is_invalid());
        assert!(DateValue::bind(Some("2019-09-01\n")).is_invalid());
    }

    #[test]
    fn test_field_spec_serializes_flat() {
        let spec = FieldSpec::text_area("description", "Description", 5, 50);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "text_area");
        assert_eq!(json["rows"], 5);
        assert_eq!(json["cols"], 50);
        assert_eq!(json["required"], false);
    }
}
