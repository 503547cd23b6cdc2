//! 欄位驗證器。每個函式回傳 `None` 表示通過，否則回傳錯誤訊息。

use crate::domain::model::Choice;
use validator::ValidateEmail;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address.";
pub const MSG_INVALID_CHOICE: &str = "Not a valid choice.";
pub const MSG_INVALID_DATE: &str = "Not a valid date value.";

/// 空字串或只有空白都視為未填
pub fn data_required(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ => Some(MSG_REQUIRED.to_string()),
    }
}

pub fn email(value: &str) -> Option<String> {
    if value.validate_email() {
        None
    } else {
        Some(MSG_INVALID_EMAIL.to_string())
    }
}

pub fn equal_to(value: Option<&str>, other: Option<&str>, other_name: &str) -> Option<String> {
    if value == other {
        None
    } else {
        Some(format!("Field must be equal to {}.", other_name))
    }
}

pub fn any_of(value: Option<&str>, choices: &[Choice]) -> Option<String> {
    match value {
        Some(v) if choices.iter().any(|c| c.value == v) => None,
        _ => Some(MSG_INVALID_CHOICE.to_string()),
    }
}
