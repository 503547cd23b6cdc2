use crate::domain::model::Choice;
use crate::utils::error::{FormError, Result};
use std::path::Path;

/// 從文字檔載入的選項清單，啟動時讀取一次
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceCatalog {
    pub languages: Vec<Choice>,
    pub driver_licenses: Vec<Choice>,
}

impl ChoiceCatalog {
    pub fn new(languages: Vec<Choice>, driver_licenses: Vec<Choice>) -> Self {
        Self {
            languages,
            driver_licenses,
        }
    }

    pub async fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        languages_file: P,
        driver_licenses_file: Q,
    ) -> Result<Self> {
        let languages = load_choice_file(languages_file).await?;
        let driver_licenses = load_choice_file(driver_licenses_file).await?;

        tracing::info!(
            "Loaded {} languages and {} driver licenses",
            languages.len(),
            driver_licenses.len()
        );

        Ok(Self {
            languages,
            driver_licenses,
        })
    }
}

/// 一行一個選項，去除空行後依字碼排序，值與標籤相同
pub async fn load_choice_file<P: AsRef<Path>>(path: P) -> Result<Vec<Choice>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    let choices = parse_choice_list(&content);

    if choices.is_empty() {
        return Err(FormError::ChoiceListError {
            path: path.display().to_string(),
            reason: "no choices found".to_string(),
        });
    }

    tracing::debug!("Read {} choices from {}", choices.len(), path.display());
    Ok(choices)
}

pub fn parse_choice_list(content: &str) -> Vec<Choice> {
    let mut lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    lines.sort_unstable();
    lines.into_iter().map(Choice::same).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_sorts_and_skips_blank_lines() {
        let choices = parse_choice_list("Italien\nAnglais\n\n  Espagnol  \nAllemand\n\n");
        let values: Vec<&str> = choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["Allemand", "Anglais", "Espagnol", "Italien"]);
        assert!(choices.iter().all(|c| c.value == c.label));
    }

    #[test]
    fn test_parse_orders_by_code_point() {
        let choices = parse_choice_list("Éwé\nEstonien\nAnglais\n");
        let values: Vec<&str> = choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["Anglais", "Estonien", "Éwé"]);
    }

    #[tokio::test]
    async fn test_load_choice_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("B\nA\nC1\n".as_bytes()).unwrap();

        let choices = load_choice_file(file.path()).await.unwrap();
        assert_eq!(choices[0], Choice::same("A"));
        assert_eq!(choices.len(), 3);
    }

    #[tokio::test]
    async fn test_load_empty_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\n\n").unwrap();

        let err = load_choice_file(file.path()).await.unwrap_err();
        assert!(matches!(err, FormError::ChoiceListError { .. }));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let err = load_choice_file("/nonexistent/languages_list.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, FormError::IoError(_)));
    }
}
