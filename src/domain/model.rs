use serde::{Deserialize, Serialize};

/// 已註冊的使用者，`username` 即登入用的電子郵件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
}

/// 下拉選單的一個選項
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// 值與顯示文字相同的選項
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

pub const LANGUAGE_LEVELS: [&str; 4] = [
    "Débutant",
    "Intermédiaire",
    "Avancé",
    "Langue maternelle",
];

pub fn language_level_choices() -> Vec<Choice> {
    LANGUAGE_LEVELS.iter().map(|level| Choice::same(*level)).collect()
}

/// 求職者可接受的工作地點範圍
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mobility {
    #[serde(rename = "city")]
    City,
    #[serde(rename = "dpt")]
    Department,
    #[serde(rename = "region")]
    Region,
    #[serde(rename = "ntn")]
    Nationwide,
}

impl Mobility {
    pub const ALL: [Mobility; 4] = [
        Mobility::City,
        Mobility::Department,
        Mobility::Region,
        Mobility::Nationwide,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Mobility::City => "city",
            Mobility::Department => "dpt",
            Mobility::Region => "region",
            Mobility::Nationwide => "ntn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mobility::City => "Ville",
            Mobility::Department => "Département",
            Mobility::Region => "Région",
            Mobility::Nationwide => "France entière",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    pub fn choices() -> Vec<Choice> {
        Self::ALL
            .iter()
            .map(|m| Choice::new(m.code(), m.label()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobility_codes_round_trip() {
        for mobility in Mobility::ALL {
            assert_eq!(Mobility::from_code(mobility.code()), Some(mobility));
        }
        assert_eq!(Mobility::from_code("world"), None);
    }

    #[test]
    fn test_mobility_choices_keep_declared_order() {
        let codes: Vec<String> = Mobility::choices().into_iter().map(|c| c.value).collect();
        assert_eq!(codes, vec!["city", "dpt", "region", "ntn"]);
    }

    #[test]
    fn test_mobility_serde_uses_codes() {
        let json = serde_json::to_string(&Mobility::Nationwide).unwrap();
        assert_eq!(json, "\"ntn\"");
    }
}
