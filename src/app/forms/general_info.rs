use crate::core::{
    validators, ChoiceCatalog, FieldErrors, FieldList, FieldSpec, Form, FormContext, FormData,
    FormSchema, Result, Subform, SubmitAction,
};
use crate::domain::model::{language_level_choices, Mobility, LANGUAGE_LEVELS};
use crate::utils::error::FormError;
use async_trait::async_trait;

pub const LANGUAGES_MIN: usize = 1;
pub const LANGUAGES_MAX: usize = 10;

/// 一種會說的語言與程度
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpokenLanguageSubform {
    pub language: Option<String>,
    pub level: Option<String>,
}

impl Subform for SpokenLanguageSubform {
    fn bind(data: &FormData, prefix: &str) -> Self {
        Self {
            language: data.value(&format!("{}language", prefix)),
            level: data.value(&format!("{}level", prefix)),
        }
    }

    fn validate(&self, catalog: &ChoiceCatalog, prefix: &str, errors: &mut FieldErrors) {
        errors.check(
            &format!("{}language", prefix),
            validators::any_of(self.language.as_deref(), &catalog.languages),
        );

        let level_ok = self
            .level
            .as_deref()
            .is_some_and(|level| LANGUAGE_LEVELS.contains(&level));
        if !level_ok {
            errors.add(format!("{}level", prefix), validators::MSG_INVALID_CHOICE);
        }
    }

    fn fields(catalog: &ChoiceCatalog) -> Vec<FieldSpec> {
        vec![
            FieldSpec::select("language", "Langue", catalog.languages.clone()),
            FieldSpec::select("level", "Niveau", language_level_choices()),
        ]
    }
}

/// 個人基本資料
#[derive(Debug, Clone)]
pub struct GeneralInfoForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub mobility: Option<String>,
    pub languages: FieldList<SpokenLanguageSubform>,
    pub description: Option<String>,
    pub add_language: bool,
    pub submit: bool,
}

impl GeneralInfoForm {
    pub fn mobility(&self) -> Option<Mobility> {
        self.mobility.as_deref().and_then(Mobility::from_code)
    }
}

#[async_trait]
impl Form for GeneralInfoForm {
    const NAME: &'static str = "general_info";

    fn schema(catalog: &ChoiceCatalog) -> FormSchema {
        FormSchema::new(
            Self::NAME,
            vec![
                FieldSpec::text("first_name", "Prénom").required(),
                FieldSpec::text("last_name", "Nom").required(),
                FieldSpec::text("phone_number", "Numéro de téléphone").required(),
                FieldSpec::text("city", "Ville de résidence").required(),
                FieldSpec::select("mobility", "Mobilité", Mobility::choices()),
                FieldList::<SpokenLanguageSubform>::spec_for(
                    "languages",
                    "Langues",
                    LANGUAGES_MIN,
                    LANGUAGES_MAX,
                    catalog,
                ),
                FieldSpec::submit("add_language", "Ajouter une langue"),
                FieldSpec::text_area(
                    "description",
                    "Présentez-vous en quelques phrases (qui êtes-vous? que recherchez-vous?)",
                    5,
                    50,
                ),
                FieldSpec::submit("submit", "Valider et continuer"),
            ],
        )
    }

    fn bind(data: &FormData) -> Self {
        Self {
            first_name: data.value("first_name"),
            last_name: data.value("last_name"),
            phone_number: data.value("phone_number"),
            city: data.value("city"),
            mobility: data.value("mobility"),
            languages: FieldList::bind("languages", data, LANGUAGES_MIN, LANGUAGES_MAX),
            description: data.value("description"),
            add_language: data.contains("add_language"),
            submit: data.contains("submit"),
        }
    }

    fn action(&self) -> SubmitAction {
        if self.add_language {
            SubmitAction::AddEntry("languages")
        } else if self.submit {
            SubmitAction::Submit
        } else {
            SubmitAction::None
        }
    }

    fn append_entry(&mut self, list: &str) -> Result<()> {
        match list {
            "languages" => self.languages.append_entry().map(|_| ()),
            other => Err(FormError::UnknownFieldList {
                form: Self::NAME.to_string(),
                list: other.to_string(),
            }),
        }
    }

    async fn validate(&self, ctx: &FormContext<'_>) -> Result<FieldErrors> {
        let mut errors = FieldErrors::new();

        for (name, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("phone_number", &self.phone_number),
            ("city", &self.city),
        ] {
            errors.check(name, validators::data_required(value.as_deref()));
        }

        if self.mobility().is_none() {
            errors.add("mobility", validators::MSG_INVALID_CHOICE);
        }

        self.languages.validate(ctx.catalog, &mut errors);

        Ok(errors)
    }
}
