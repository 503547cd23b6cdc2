use crate::core::choices::ChoiceCatalog;
use crate::core::field::FormSchema;
use crate::core::field_errors::FieldErrors;
use crate::core::form_data::FormData;
use crate::domain::ports::UserStore;
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use serde::Serialize;

/// 驗證時需要的外部資料
pub struct FormContext<'a> {
    pub catalog: &'a ChoiceCatalog,
    pub users: &'a dyn UserStore,
}

impl<'a> FormContext<'a> {
    pub fn new(catalog: &'a ChoiceCatalog, users: &'a dyn UserStore) -> Self {
        Self { catalog, users }
    }
}

/// 使用者按下的按鈕
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "list", rename_all = "snake_case")]
pub enum SubmitAction {
    Submit,
    AddEntry(&'static str),
    None,
}

#[async_trait]
pub trait Form: Sized + Send + Sync {
    const NAME: &'static str;

    fn schema(catalog: &ChoiceCatalog) -> FormSchema;

    fn bind(data: &FormData) -> Self;

    fn action(&self) -> SubmitAction;

    /// 只有含可重複清單的表單需要覆寫
    fn append_entry(&mut self, list: &str) -> Result<()> {
        Err(FormError::UnknownFieldList {
            form: Self::NAME.to_string(),
            list: list.to_string(),
        })
    }

    async fn validate(&self, ctx: &FormContext<'_>) -> Result<FieldErrors>;
}

#[derive(Debug)]
pub struct Submission<F> {
    pub form: F,
    pub action: SubmitAction,
    pub errors: Option<FieldErrors>,
}

impl<F: Form> Submission<F> {
    /// 只有真的跑過驗證且沒有錯誤才算通過
    pub fn is_valid(&self) -> bool {
        matches!(&self.errors, Some(errors) if errors.is_empty())
    }

    pub fn report(&self) -> SubmissionReport {
        SubmissionReport {
            form: F::NAME,
            action: self.action,
            validated: self.errors.is_some(),
            valid: self.is_valid(),
            errors: self.errors.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    pub form: &'static str,
    pub action: SubmitAction,
    pub validated: bool,
    pub valid: bool,
    pub errors: FieldErrors,
}

/// 綁定送出的資料，依按下的按鈕新增一列或執行驗證
pub async fn process<F: Form>(data: &FormData, ctx: &FormContext<'_>) -> Result<Submission<F>> {
    let mut form = F::bind(data);
    let action = form.action();
    tracing::debug!("Processing '{}' with action {:?}", F::NAME, action);

    let errors = match action {
        SubmitAction::AddEntry(list) => {
            form.append_entry(list)?;
            None
        }
        SubmitAction::Submit => {
            let errors = form.validate(ctx).await?;
            if errors.is_empty() {
                tracing::debug!("'{}' passed validation", F::NAME);
            } else {
                tracing::debug!("'{}' has {} invalid fields", F::NAME, errors.len());
            }
            Some(errors)
        }
        SubmitAction::None => None,
    };

    Ok(Submission {
        form,
        action,
        errors,
    })
}
