use crate::core::{
    validators, ChoiceCatalog, DateValue, FieldErrors, FieldList, FieldSpec, Form, FormContext,
    FormData, FormSchema, Result, Subform, SubmitAction,
};
use crate::utils::error::FormError;
use async_trait::async_trait;

pub const ENTRIES_MAX: usize = 10;

/// 學歷與工作經歷共用的一列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormationExperienceSubform {
    pub date_start: DateValue,
    pub date_end: DateValue,
    pub title: Option<String>,
    pub institution: Option<String>,
    pub desc: Option<String>,
}

impl Subform for FormationExperienceSubform {
    fn bind(data: &FormData, prefix: &str) -> Self {
        Self {
            date_start: DateValue::bind(data.get(&format!("{}date_start", prefix))),
            date_end: DateValue::bind(data.get(&format!("{}date_end", prefix))),
            title: data.value(&format!("{}title", prefix)),
            institution: data.value(&format!("{}institution", prefix)),
            desc: data.value(&format!("{}desc", prefix)),
        }
    }

    fn validate(&self, _catalog: &ChoiceCatalog, prefix: &str, errors: &mut FieldErrors) {
        for (name, date) in [("date_start", &self.date_start), ("date_end", &self.date_end)] {
            if date.is_invalid() {
                errors.add(format!("{}{}", prefix, name), validators::MSG_INVALID_DATE);
            }
        }
    }

    fn fields(_catalog: &ChoiceCatalog) -> Vec<FieldSpec> {
        vec![
            FieldSpec::date("date_start", "Date de début"),
            FieldSpec::date("date_end", "Date de fin"),
            FieldSpec::text("title", "Titre"),
            FieldSpec::text("institution", "Établissement"),
            FieldSpec::text_area("desc", "Description", 5, 50),
        ]
    }
}

/// 學歷與經歷表單只差在清單名稱與按鈕文字
#[derive(Debug, Clone)]
pub struct EntriesForm<K: EntriesKind> {
    pub entries: FieldList<FormationExperienceSubform>,
    pub add_entry: bool,
    pub submit: bool,
    _kind: std::marker::PhantomData<K>,
}

pub trait EntriesKind: Send + Sync + 'static {
    const FORM_NAME: &'static str;
    const LIST_NAME: &'static str;
    const LIST_LABEL: &'static str;
    const ADD_BUTTON: &'static str;
    const ADD_LABEL: &'static str;
}

#[derive(Debug, Clone, Copy)]
pub struct Formation;

impl EntriesKind for Formation {
    const FORM_NAME: &'static str = "formation";
    const LIST_NAME: &'static str = "formation_entries";
    const LIST_LABEL: &'static str = "Formations";
    const ADD_BUTTON: &'static str = "add_formation";
    const ADD_LABEL: &'static str = "Ajouter une formation";
}

#[derive(Debug, Clone, Copy)]
pub struct Experience;

impl EntriesKind for Experience {
    const FORM_NAME: &'static str = "experience";
    const LIST_NAME: &'static str = "experience_entries";
    const LIST_LABEL: &'static str = "Expériences";
    const ADD_BUTTON: &'static str = "add_experience";
    const ADD_LABEL: &'static str = "Ajouter une expérience";
}

pub type FormationForm = EntriesForm<Formation>;
pub type ExperienceForm = EntriesForm<Experience>;

#[async_trait]
impl<K: EntriesKind> Form for EntriesForm<K> {
    const NAME: &'static str = K::FORM_NAME;

    fn schema(catalog: &ChoiceCatalog) -> FormSchema {
        FormSchema::new(
            Self::NAME,
            vec![
                FieldList::<FormationExperienceSubform>::spec_for(
                    K::LIST_NAME,
                    K::LIST_LABEL,
                    0,
                    ENTRIES_MAX,
                    catalog,
                ),
                FieldSpec::submit(K::ADD_BUTTON, K::ADD_LABEL),
                FieldSpec::submit("submit", "Valider et continuer"),
            ],
        )
    }

    fn bind(data: &FormData) -> Self {
        Self {
            entries: FieldList::bind(K::LIST_NAME, data, 0, ENTRIES_MAX),
            add_entry: data.contains(K::ADD_BUTTON),
            submit: data.contains("submit"),
            _kind: std::marker::PhantomData,
        }
    }

    fn action(&self) -> SubmitAction {
        if self.add_entry {
            SubmitAction::AddEntry(K::LIST_NAME)
        } else if self.submit {
            SubmitAction::Submit
        } else {
            SubmitAction::None
        }
    }

    fn append_entry(&mut self, list: &str) -> Result<()> {
        if list == K::LIST_NAME {
            self.entries.append_entry().map(|_| ())
        } else {
            Err(FormError::UnknownFieldList {
                form: Self::NAME.to_string(),
                list: list.to_string(),
            })
        }
    }

    async fn validate(&self, ctx: &FormContext<'_>) -> Result<FieldErrors> {
        let mut errors = FieldErrors::new();
        self.entries.validate(ctx.catalog, &mut errors);
        Ok(errors)
    }
}
