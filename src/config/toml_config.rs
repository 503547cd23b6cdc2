use crate::core::ChoiceCatalog;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("environment variable pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub users: UsersConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_languages_file")]
    pub languages_file: String,
    #[serde(default = "default_driver_licenses_file")]
    pub driver_licenses_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            languages_file: default_languages_file(),
            driver_licenses_file: default_driver_licenses_file(),
        }
    }
}

fn default_languages_file() -> String {
    "data/languages_list.txt".to_string()
}

fn default_driver_licenses_file() -> String {
    "data/french_driver_licenses.txt".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersConfig {
    /// 沒有設定時使用空的記憶體資料
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub async fn load_catalog(&self) -> Result<ChoiceCatalog> {
        ChoiceCatalog::load(&self.data.languages_file, &self.data.driver_licenses_file).await
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data.languages_file", &self.data.languages_file)?;
        validate_path("data.driver_licenses_file", &self.data.driver_licenses_file)?;

        if let Some(file) = &self.users.file {
            validate_path("users.file", file)?;
            validate_file_extension("users.file", file, &["json"])?;
        }

        Ok(())
    }
}
