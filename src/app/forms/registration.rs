use crate::core::{
    validators, ChoiceCatalog, FieldErrors, FieldSpec, Form, FormContext, FormData, FormSchema,
    Result, SubmitAction,
};
use crate::utils::logger::mask_login;
use async_trait::async_trait;

pub const MSG_DUPLICATE_LOGIN: &str = "Cette adresse électronique a déjà été utilisée.";

/// 註冊表單，登入帳號必須是尚未使用過的電子郵件
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
    pub submit: bool,
}

impl RegistrationForm {
    /// 必填通過後才檢查格式與是否重複；格式錯誤仍會查詢是否重複
    async fn validate_username(&self, ctx: &FormContext<'_>, errors: &mut FieldErrors) -> Result<()> {
        let username = self.username.as_deref();
        if errors.check("username", validators::data_required(username)) {
            return Ok(());
        }
        let username = username.unwrap_or_default();

        errors.check("username", validators::email(username));

        if ctx.users.username_taken(username).await? {
            tracing::warn!("Registration attempt with existing login {}", mask_login(username));
            errors.add("username", MSG_DUPLICATE_LOGIN);
        }
        Ok(())
    }
}

#[async_trait]
impl Form for RegistrationForm {
    const NAME: &'static str = "registration";

    fn schema(_catalog: &ChoiceCatalog) -> FormSchema {
        FormSchema::new(
            Self::NAME,
            vec![
                FieldSpec::email("username", "Adresse électronique").required(),
                FieldSpec::password("password", "Mot de passe").required(),
                FieldSpec::password("password2", "Répéter le mot de passe").required(),
                FieldSpec::submit("submit", "Valider"),
            ],
        )
    }

    fn bind(data: &FormData) -> Self {
        Self {
            username: data.value("username"),
            password: data.value("password"),
            password2: data.value("password2"),
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

    async fn validate(&self, ctx: &FormContext<'_>) -> Result<FieldErrors> {
        let mut errors = FieldErrors::new();

        self.validate_username(ctx, &mut errors).await?;

        errors.check("password", validators::data_required(self.password.as_deref()));

        if !errors.check("password2", validators::data_required(self.password2.as_deref())) {
            errors.check(
                "password2",
                validators::equal_to(
                    self.password2.as_deref(),
                    self.password.as_deref(),
                    "password",
                ),
            );
        }

        Ok(errors)
    }
}
