use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Choice list '{path}' is unusable: {reason}")]
    ChoiceListError { path: String, reason: String },

    #[error("User store error: {message}")]
    UserStoreError { message: String },

    #[error("Field list '{field}' cannot hold more than {max} entries")]
    TooManyEntries { field: String, max: usize },

    #[error("Unknown form: {name}")]
    UnknownForm { name: String },

    #[error("Form '{form}' has no field list named '{list}'")]
    UnknownFieldList { form: String, list: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Storage,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FormError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormError::ConfigValidationError { .. } | FormError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            FormError::ChoiceListError { .. } | FormError::SerializationError(_) => {
                ErrorCategory::Data
            }
            FormError::UserStoreError { .. } => ErrorCategory::Storage,
            FormError::TooManyEntries { .. }
            | FormError::UnknownForm { .. }
            | FormError::UnknownFieldList { .. } => ErrorCategory::Input,
            FormError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FormError::IoError(_) => {
                "Check that the data files exist and are readable".to_string()
            }
            FormError::SerializationError(_) => {
                "Check that the JSON input is well formed".to_string()
            }
            FormError::ConfigValidationError { .. } => {
                "Review the TOML configuration file".to_string()
            }
            FormError::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the configuration", field)
            }
            FormError::ChoiceListError { path, .. } => {
                format!("Put at least one choice per line in {}", path)
            }
            FormError::UserStoreError { .. } => {
                "Check the user store file and retry".to_string()
            }
            FormError::TooManyEntries { .. } => {
                "Remove an entry before adding another one".to_string()
            }
            FormError::UnknownForm { .. } => {
                "Use one of: login, registration, general-info, certifications, formation, experience"
                    .to_string()
            }
            FormError::UnknownFieldList { .. } => {
                "Only press the add buttons shown on the form".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::IoError(e) => format!("Could not read a required file: {}", e),
            FormError::TooManyEntries { field, max } => {
                format!("'{}' already has the maximum of {} entries", field, max)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
