pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::{InMemoryUserStore, JsonFileUserStore};
pub use crate::app::forms::{process_kind, schema_for, FormKind};
pub use crate::config::AppConfig;
pub use crate::core::{ChoiceCatalog, Form, FormContext, FormData, SubmissionReport};
pub use crate::utils::error::{FormError, Result};
