use std::collections::BTreeSet;

/// 一次請求送出的表單欄位，保留原始順序，同名欄位可重複
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析 `application/x-www-form-urlencoded` 內容
    pub fn from_urlencoded(body: &str) -> Self {
        let pairs = url::form_urlencoded::parse(body.trim().as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    /// 送出按鈕只要名稱存在就算被按下
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// 找出 `{list}-{N}-{field}` 形式的所有索引，排序且不重複
    pub fn indices(&self, list_name: &str) -> Vec<usize> {
        let indices: BTreeSet<usize> = self
            .pairs
            .iter()
            .filter_map(|(key, _)| parse_index(key, list_name))
            .collect();
        indices.into_iter().collect()
    }
}

fn parse_index(key: &str, list_name: &str) -> Option<usize> {
    let rest = key.strip_prefix(list_name)?.strip_prefix('-')?;
    let (digits, _field) = rest.split_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
