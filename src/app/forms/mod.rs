pub mod certifications;
pub mod formation;
pub mod general_info;
pub mod login;
pub mod registration;

pub use certifications::{CertificationsForm, DriverLicenseSubform, OtherCertificationSubform};
pub use formation::{ExperienceForm, FormationExperienceSubform, FormationForm};
pub use general_info::{GeneralInfoForm, SpokenLanguageSubform};
pub use login::LoginForm;
pub use registration::RegistrationForm;

use crate::core::{process, ChoiceCatalog, Form, FormContext, FormData, FormSchema, SubmissionReport};
use crate::utils::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 網站上所有的表單
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Login,
    Registration,
    GeneralInfo,
    Certifications,
    Formation,
    Experience,
}

impl FormKind {
    pub const ALL: [FormKind; 6] = [
        FormKind::Login,
        FormKind::Registration,
        FormKind::GeneralInfo,
        FormKind::Certifications,
        FormKind::Formation,
        FormKind::Experience,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Registration => "registration",
            FormKind::GeneralInfo => "general-info",
            FormKind::Certifications => "certifications",
            FormKind::Formation => "formation",
            FormKind::Experience => "experience",
        }
    }
}

impl FromStr for FormKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| FormError::UnknownForm {
                name: s.to_string(),
            })
    }
}

pub fn schema_for(kind: FormKind, catalog: &ChoiceCatalog) -> FormSchema {
    match kind {
        FormKind::Login => LoginForm::schema(catalog),
        FormKind::Registration => RegistrationForm::schema(catalog),
        FormKind::GeneralInfo => GeneralInfoForm::schema(catalog),
        FormKind::Certifications => CertificationsForm::schema(catalog),
        FormKind::Formation => FormationForm::schema(catalog),
        FormKind::Experience => ExperienceForm::schema(catalog),
    }
}

async fn report<F: Form>(data: &FormData, ctx: &FormContext<'_>) -> Result<SubmissionReport> {
    Ok(process::<F>(data, ctx).await?.report())
}

pub async fn process_kind(
    kind: FormKind,
    data: &FormData,
    ctx: &FormContext<'_>,
) -> Result<SubmissionReport> {
    match kind {
        FormKind::Login => report::<LoginForm>(data, ctx).await,
        FormKind::Registration => report::<RegistrationForm>(data, ctx).await,
        FormKind::GeneralInfo => report::<GeneralInfoForm>(data, ctx).await,
        FormKind::Certifications => report::<CertificationsForm>(data, ctx).await,
        FormKind::Formation => report::<FormationForm>(data, ctx).await,
        FormKind::Experience => report::<ExperienceForm>(data, ctx).await,
    }
}
