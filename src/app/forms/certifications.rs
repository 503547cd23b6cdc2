use crate::core::{
    validators, ChoiceCatalog, FieldErrors, FieldList, FieldSpec, Form, FormContext, FormData,
    FormSchema, Result, Subform, SubmitAction,
};
use crate::utils::error::FormError;
use async_trait::async_trait;

pub const CERTIFICATIONS_MAX: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverLicenseSubform {
    pub driver_license: Option<String>,
}

impl Subform for DriverLicenseSubform {
    fn bind(data: &FormData, prefix: &str) -> Self {
        Self {
            driver_license: data.value(&format!("{}driver_license", prefix)),
        }
    }

    fn validate(&self, catalog: &ChoiceCatalog, prefix: &str, errors: &mut FieldErrors) {
        errors.check(
            &format!("{}driver_license", prefix),
            validators::any_of(self.driver_license.as_deref(), &catalog.driver_licenses),
        );
    }

    fn fields(catalog: &ChoiceCatalog) -> Vec<FieldSpec> {
        vec![FieldSpec::select(
            "driver_license",
            "Permis",
            catalog.driver_licenses.clone(),
        )]
    }
}

/// 自由填寫的其他證照，不做驗證
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherCertificationSubform {
    pub other_certif: Option<String>,
}

impl Subform for OtherCertificationSubform {
    fn bind(data: &FormData, prefix: &str) -> Self {
        Self {
            other_certif: data.value(&format!("{}other_certif", prefix)),
        }
    }

    fn validate(&self, _catalog: &ChoiceCatalog, _prefix: &str, _errors: &mut FieldErrors) {}

    fn fields(_catalog: &ChoiceCatalog) -> Vec<FieldSpec> {
        vec![FieldSpec::text("other_certif", "Autre certification")]
    }
}

#[derive(Debug, Clone)]
pub struct CertificationsForm {
    pub driver_licenses: FieldList<DriverLicenseSubform>,
    pub other_certifications: FieldList<OtherCertificationSubform>,
    pub add_license: bool,
    pub add_other_certif: bool,
    pub submit: bool,
}

#[async_trait]
impl Form for CertificationsForm {
    const NAME: &'static str = "certifications";

    fn schema(catalog: &ChoiceCatalog) -> FormSchema {
        FormSchema::new(
            Self::NAME,
            vec![
                FieldList::<DriverLicenseSubform>::spec_for(
                    "driver_licenses",
                    "Permis de conduire",
                    0,
                    CERTIFICATIONS_MAX,
                    catalog,
                ),
                FieldSpec::submit("add_license", "Ajouter un permis"),
                FieldList::<OtherCertificationSubform>::spec_for(
                    "other_certifications",
                    "Autres certifications",
                    0,
                    CERTIFICATIONS_MAX,
                    catalog,
                ),
                FieldSpec::submit("add_other_certif", "Ajouter une certification"),
                FieldSpec::submit("submit", "Valider et continuer"),
            ],
        )
    }

    fn bind(data: &FormData) -> Self {
        Self {
            driver_licenses: FieldList::bind("driver_licenses", data, 0, CERTIFICATIONS_MAX),
            other_certifications: FieldList::bind(
                "other_certifications",
                data,
                0,
                CERTIFICATIONS_MAX,
            ),
            add_license: data.contains("add_license"),
            add_other_certif: data.contains("add_other_certif"),
            submit: data.contains("submit"),
        }
    }

    fn action(&self) -> SubmitAction {
        if self.add_license {
            SubmitAction::AddEntry("driver_licenses")
        } else if self.add_other_certif {
            SubmitAction::AddEntry("other_certifications")
        } else if self.submit {
            SubmitAction::Submit
        } else {
            SubmitAction::None
        }
    }

    fn append_entry(&mut self, list: &str) -> Result<()> {
        match list {
            "driver_licenses" => self.driver_licenses.append_entry().map(|_| ()),
            "other_certifications" => self.other_certifications.append_entry().map(|_| ()),
            other => Err(FormError::UnknownFieldList {
                form: Self::NAME.to_string(),
                list: other.to_string(),
            }),
        }
    }

    async fn validate(&self, ctx: &FormContext<'_>) -> Result<FieldErrors> {
        let mut errors = FieldErrors::new();
        self.driver_licenses.validate(ctx.catalog, &mut errors);
        self.other_certifications.validate(ctx.catalog, &mut errors);
        Ok(errors)
    }
}
