use crate::core::{
    validators, ChoiceCatalog, FieldErrors, FieldSpec, Form, FormContext, FormData, FormSchema,
    Result, SubmitAction,
};
use async_trait::async_trait;

/// 登入表單
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
    pub submit: bool,
}

#[async_trait]
impl Form for LoginForm {
    const NAME: &'static str = "login";

    fn schema(_catalog: &ChoiceCatalog) -> FormSchema {
        FormSchema::new(
            Self::NAME,
            vec![
                FieldSpec::text("username", "Adresse électronique").required(),
                FieldSpec::password("password", "Mot de passe").required(),
                FieldSpec::submit("submit", "Connexion"),
            ],
        )
    }

    fn bind(data: &FormData) -> Self {
        Self {
            username: data.value("username"),
            password: data.value("password"),
            submit: data.contains("submit"),
        }
    }

    fn action(&self) -> SubmitAction {
        if self.submit {
            SubmitAction::Submit
        } else {
            SubmitAction::None
        }
    }

    async fn validate(&self, _ctx: &FormContext<'_>) -> Result<FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("username", validators::data_required(self.username.as_deref()));
        errors.check("password", validators::data_required(self.password.as_deref()));
        Ok(errors)
    }
}
